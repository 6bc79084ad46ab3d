use crate::repr::{And, Bit, Empty, False, Node, Same, True, TypeList};

/// Positional equality of two lists.
///
/// Two lists are equal when they have the same length and the same element
/// at every position. The four cases below are disjoint impls, so the
/// doubly-empty case never competes with the length-mismatch cases.
#[diagnostic::on_unimplemented(
    message = "cannot compare `{Self}` with `{Rhs}`",
    label = "elements at the same position must have a known identity relation"
)]
pub trait Equal<Rhs: TypeList>: TypeList {
    type Output: Bit;

    const VALUE: bool = <<Self as Equal<Rhs>>::Output as Bit>::VALUE;
}

impl Equal<Empty> for Empty {
    type Output = True;
}

impl<H, T: TypeList> Equal<Node<H, T>> for Empty {
    type Output = False;
}

impl<H, T: TypeList> Equal<Empty> for Node<H, T> {
    type Output = False;
}

impl<H1, T1, H2, T2> Equal<Node<H2, T2>> for Node<H1, T1>
where
    H1: Same<H2>,
    T1: Equal<T2>,
    T2: TypeList,
{
    type Output = And<<H1 as Same<H2>>::Output, <T1 as Equal<T2>>::Output>;
}

pub type EqualOut<A, B> = <A as Equal<B>>::Output;

/// Whether `A` and `B` hold the same elements in the same order.
pub const fn equal<A: Equal<B>, B: TypeList>() -> bool {
    <A as Equal<B>>::VALUE
}
