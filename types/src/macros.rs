//! Type construction macros.
//!
//! # Example
//!
//! ```
//! use typeseq_types::{make, Empty, Node};
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(make![], Empty);
//! assert_type_eq_all!(make![u8, char], Node<u8, Node<char, Empty>>);
//! ```

/// Builds a type list from its elements, in order.
///
/// `make![T0, T1, ..., Tn]` is `Node<T0, Node<T1, ... Node<Tn, Empty>>>`.
/// A trailing comma is accepted and `make![]` is [`Empty`](crate::Empty).
#[macro_export]
macro_rules! make {
    () => { $crate::Empty };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::Node<$head, $crate::make![$($rest),*]>
    };
}

/// Declares exact type identity for a set of types.
///
/// For every pair `(A, B)` among the listed types this implements
/// [`Same<B>`](crate::Same) for `A`, with `Output = True` when `A` and `B`
/// are the same entry and `False` otherwise. Each listed type is also made
/// distinct from the built-in universe: primitive scalars, `str`, Peano
/// naturals, type-level booleans, type lists, `Option<_>`, tuples of one to
/// four elements and `&'static _` (through [`RefSame`](crate::RefSame)).
///
/// Once declared, a type composes with the structural shapes, so
/// `Option<Apple>`, `(Apple, u8)` and `&'static Apple` are comparable too.
///
/// Every type must be listed exactly once, and a type may belong to only one
/// universe. Built-in types are already declared and must not be listed,
/// nor may foreign types such as `Option<u8>` or `Vec<u8>`.
///
/// ```
/// use typeseq_types::{contains, make, same_universe};
///
/// struct Apple;
/// struct Pear;
/// struct Plum;
///
/// same_universe!(Apple, Pear, Plum);
///
/// type Basket = make![Apple, u8, Pear, (Plum, &'static Apple)];
/// const _: () = assert!(contains::<Basket, Pear>());
/// const _: () = assert!(!contains::<Basket, Plum>());
/// const _: () = assert!(contains::<Basket, (Plum, &'static Apple)>());
/// const _: () = assert!(!contains::<Basket, Option<Apple>>());
/// ```
///
/// Types that were never declared cannot be compared:
///
/// ```compile_fail,E0277
/// use typeseq_types::{contains, make};
///
/// struct Unknown;
///
/// const _: () = assert!(!contains::<make![u8], Unknown>());
/// ```
#[macro_export]
macro_rules! same_universe {
    (@pairs) => {};
    (@pairs $head:ty $(, $rest:ty)* $(,)?) => {
        impl $crate::Same<$head> for $head {
            type Output = $crate::True;
        }
        $(
            impl $crate::Same<$rest> for $head {
                type Output = $crate::False;
            }
            impl $crate::Same<$head> for $rest {
                type Output = $crate::False;
            }
        )*
        $crate::same_universe!(@pairs $($rest),*);
    };
    (@reflexive $($t:ty),* $(,)?) => {
        $(
            impl $crate::Same<$t> for $t {
                type Output = $crate::True;
            }
        )*
    };
    // Generic parameter lists are either empty or end with a comma.
    (@distinct [$($ga:tt)*] $a:ty, [$($gb:tt)*] $b:ty) => {
        impl<$($ga)* $($gb)*> $crate::Same<$b> for $a {
            type Output = $crate::False;
        }
        impl<$($ga)* $($gb)*> $crate::Same<$a> for $b {
            type Output = $crate::False;
        }
    };
    (@unrelated [$($g:tt)*] $t:ty) => {
        impl<R: ?Sized, $($g)*> $crate::RefSame<R> for $t {
            type Output = $crate::False;
        }
        impl<R: ?Sized, $($g)*> $crate::Same<&'static R> for $t {
            type Output = $crate::False;
        }
    };
    (@cross) => {};
    (@cross $hg:tt $head:ty $(; $rg:tt $rest:ty)*) => {
        $( $crate::same_universe!(@distinct $hg $head, $rg $rest); )*
        $crate::same_universe!(@cross $($rg $rest);*);
    };
    (@against $hg:tt $t:ty; $($rg:tt $rest:ty);*) => {
        $( $crate::same_universe!(@distinct $hg $t, $rg $rest); )*
        $crate::same_universe!(@unrelated $hg $t);
    };
    (@each_unrelated $($g:tt $t:ty);*) => {
        $( $crate::same_universe!(@unrelated $g $t); )*
    };
    // Calls back with the built-in universe appended, each entry as
    // `[generics] type`.
    (@with_builtins $($cb:tt)*) => {
        $crate::same_universe!($($cb)*
            [] $crate::Z;
            [N: $crate::Nat,] $crate::S<N>;
            [] $crate::True;
            [] $crate::False;
            [] $crate::Empty;
            [NH, NT: $crate::TypeList,] $crate::Node<NH, NT>;
            [O,] ::core::option::Option<O>;
            [T1,] (T1,);
            [U1, U2,] (U1, U2);
            [V1, V2, V3,] (V1, V2, V3);
            [W1, W2, W3, W4,] (W1, W2, W3, W4);
            [] bool; [] char; [] (); [] str;
            [] i8; [] i16; [] i32; [] i64; [] i128; [] isize;
            [] u8; [] u16; [] u32; [] u64; [] u128; [] usize;
            [] f32; [] f64
        );
    };
    ($($t:ty),+ $(,)?) => {
        $crate::same_universe!(@pairs $($t),+);
        $( $crate::same_universe!(@with_builtins @against [] $t;); )+
    };
}
