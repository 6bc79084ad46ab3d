//! Compile-time unsigned integers.
//!
//! [`Value`] is any type carrying a `usize` constant. [`Nat`] narrows that to
//! Peano naturals, whose structure makes `S<S<Z>>` and `N2` the same type:
//! arithmetic on them yields canonical results that can be compared by type
//! identity.

use core::marker::PhantomData;

use super::list::private::Sealed;

/// A type standing for a `usize` known at compile time.
pub trait Value {
    const VALUE: usize;
}

/// A Peano natural number.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a type-level natural",
    label = "expected `Z` or `S<N>`",
    note = "`Const<N>` carries a value but is not a natural; use `N0`..`N16` or `S<N>`"
)]
pub trait Nat: Value + Sealed {}

/// Zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Z;

/// The successor of `N`.
pub struct S<N: Nat>(PhantomData<fn() -> N>);

impl Sealed for Z {}
impl<N: Nat> Sealed for S<N> {}

impl Value for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Value for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

impl Nat for Z {}
impl<N: Nat> Nat for S<N> {}

/// A `usize` constant with no Peano structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

impl<const N: usize> Value for Const<N> {
    const VALUE: usize = N;
}

pub type N0 = Z;
pub type N1 = S<N0>;
pub type N2 = S<N1>;
pub type N3 = S<N2>;
pub type N4 = S<N3>;
pub type N5 = S<N4>;
pub type N6 = S<N5>;
pub type N7 = S<N6>;
pub type N8 = S<N7>;
pub type N9 = S<N8>;
pub type N10 = S<N9>;
pub type N11 = S<N10>;
pub type N12 = S<N11>;
pub type N13 = S<N12>;
pub type N14 = S<N13>;
pub type N15 = S<N14>;
pub type N16 = S<N15>;

/// The larger of two naturals.
#[diagnostic::on_unimplemented(
    message = "cannot take the larger of `{Self}` and `{Rhs}`",
    label = "both operands must be type-level naturals"
)]
pub trait NatMax<Rhs: Nat>: Nat {
    type Output: Nat;
}

impl<B: Nat> NatMax<B> for Z {
    type Output = B;
}

impl<A: Nat> NatMax<Z> for S<A> {
    type Output = S<A>;
}

impl<A: NatMax<B>, B: Nat> NatMax<S<B>> for S<A> {
    type Output = S<<A as NatMax<B>>::Output>;
}

pub type MaxOut<A, B> = <A as NatMax<B>>::Output;
