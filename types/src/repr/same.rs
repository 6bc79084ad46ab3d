//! Exact type identity.
//!
//! Stable Rust cannot ask "are these two arbitrary types the same?" at
//! compile time, so identity is a relation declared over a known universe of
//! types. The built-in universe covers:
//!
//! - the primitive scalars and `str`
//! - the Peano naturals, the type-level booleans and type lists
//! - `&'static T`, `Option<T>` and tuples of one to four elements, compared
//!   element-wise, so `(u8, &'static str)` is as comparable as its parts
//!
//! User types join it through [`same_universe!`](crate::same_universe), and
//! then also compose with the structural shapes above.
//!
//! Arrays, slices, `Box`, `Vec` and other generic std types are not in the
//! universe; comparing them is rejected at compile time. The run-time
//! `typeseq-reflect` crate compares any `'static` type.
//!
//! Identity is exact: two types that merely convert into one another, or
//! that share a trait, are different.

use super::{
    bit::{And, Bit, False, True},
    list::{Empty, Node, TypeList},
    nat::{Nat, S, Z},
};
use crate::algo::Equal;

/// `Output` is [`True`] iff `Self` and `Rhs` are the same type.
#[diagnostic::on_unimplemented(
    message = "no identity relation is known between `{Self}` and `{Rhs}`",
    label = "cannot decide whether `{Self}` is `{Rhs}` at compile time",
    note = "declare both types together with `same_universe!(...)`"
)]
pub trait Same<Rhs: ?Sized> {
    type Output: Bit;
}

pub type IsSame<A, B> = <A as Same<B>>::Output;

/// Identity of `Self` against `&'static R`.
///
/// References compare against everything through this trait: a crate may
/// implement it for its own types, which it could not do with
/// `Same<Local> for &'static R`.
#[diagnostic::on_unimplemented(
    message = "no identity relation is known between `{Self}` and `&'static {R}`",
    label = "cannot decide whether `{Self}` is `&'static {R}` at compile time",
    note = "declare `{Self}` with `same_universe!(...)`"
)]
pub trait RefSame<R: ?Sized> {
    type Output: Bit;
}

impl<R: ?Sized, X: ?Sized + RefSame<R>> Same<X> for &'static R {
    type Output = <X as RefSame<R>>::Output;
}

impl<A: ?Sized + Same<R>, R: ?Sized> RefSame<R> for &'static A {
    type Output = <A as Same<R>>::Output;
}

impl Same<Z> for Z {
    type Output = True;
}

impl<A: Nat + Same<B>, B: Nat> Same<S<B>> for S<A> {
    type Output = <A as Same<B>>::Output;
}

impl Same<True> for True {
    type Output = True;
}

impl Same<False> for False {
    type Output = True;
}

impl Same<Empty> for Empty {
    type Output = True;
}

impl<H1, T1: TypeList, H2, T2: TypeList> Same<Node<H2, T2>> for Node<H1, T1>
where
    Node<H1, T1>: Equal<Node<H2, T2>>,
{
    type Output = <Node<H1, T1> as Equal<Node<H2, T2>>>::Output;
}

impl<A: Same<B>, B> Same<Option<B>> for Option<A> {
    type Output = IsSame<A, B>;
}

impl<A1: Same<B1>, B1> Same<(B1,)> for (A1,) {
    type Output = IsSame<A1, B1>;
}

impl<A1: Same<B1>, A2: Same<B2>, B1, B2> Same<(B1, B2)> for (A1, A2) {
    type Output = And<IsSame<A1, B1>, IsSame<A2, B2>>;
}

impl<A1: Same<B1>, A2: Same<B2>, A3: Same<B3>, B1, B2, B3> Same<(B1, B2, B3)> for (A1, A2, A3) {
    type Output = And<IsSame<A1, B1>, And<IsSame<A2, B2>, IsSame<A3, B3>>>;
}

impl<A1, A2, A3, A4, B1, B2, B3, B4> Same<(B1, B2, B3, B4)> for (A1, A2, A3, A4)
where
    A1: Same<B1>,
    A2: Same<B2>,
    A3: Same<B3>,
    A4: Same<B4>,
{
    type Output = And<IsSame<A1, B1>, And<IsSame<A2, B2>, And<IsSame<A3, B3>, IsSame<A4, B4>>>>;
}

crate::same_universe!(@reflexive
    bool, char, (), str,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64
);

// Every built-in shape is distinct from every other, and from references.
crate::same_universe!(@with_builtins @cross);
crate::same_universe!(@with_builtins @each_unrelated);
