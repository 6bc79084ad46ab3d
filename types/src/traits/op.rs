use crate::repr::{Nat, NatMax, S};

/// A type-level function of one argument, supplied to
/// [`Transform`](crate::Transform).
///
/// Implement it on a marker type, once per element type (or generically):
///
/// ```
/// use typeseq_types::{make, Transformed, UnaryOp};
/// use static_assertions::assert_type_eq_all;
///
/// struct Boxed;
///
/// impl<T> UnaryOp<T> for Boxed {
///     type Output = Box<T>;
/// }
///
/// assert_type_eq_all!(Transformed<make![u8, char], Boxed>, make![Box<u8>, Box<char>]);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a unary operation over `{T}`",
    label = "no result type is defined for `{T}`",
    note = "a transform needs `UnaryOp<T>` for every element `T` of the list"
)]
pub trait UnaryOp<T> {
    type Output;
}

/// A type-level function combining an element with an accumulator, supplied
/// to [`Foldl`](crate::Foldl).
///
/// The element comes first: a fold step is `Op(element, accumulator)`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a binary operation over (`{E}`, `{Acc}`)",
    label = "no result type is defined for element `{E}` with accumulator `{Acc}`",
    note = "a fold needs `BinaryOp<E, Acc>` for each element `E` and each intermediate accumulator"
)]
pub trait BinaryOp<E, Acc> {
    type Output;
}

pub type Apply<Op, T> = <Op as UnaryOp<T>>::Output;
pub type Apply2<Op, E, Acc> = <Op as BinaryOp<E, Acc>>::Output;

/// Maps every type to itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<T> UnaryOp<T> for Identity {
    type Output = T;
}

/// Successor of a natural.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inc;

impl<N: Nat> UnaryOp<N> for Inc {
    type Output = S<N>;
}

/// The larger of two naturals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl<A: NatMax<B>, B: Nat> BinaryOp<A, B> for Max {
    type Output = <A as NatMax<B>>::Output;
}
