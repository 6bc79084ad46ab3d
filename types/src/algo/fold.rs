//! Left fold over a type list.
//!
//! `foldl(Empty, Op, Init) = Init` and
//! `foldl(Node<H, T>, Op, Init) = foldl(T, Op, Op(H, Init))`.
//!
//! Elements are visited front to back and each step applies the operation as
//! `Op(element, accumulator)`, element first. For a non-commutative operation
//! this order is observable, e.g. folding [`Push`](crate::algo::Push) from
//! `Empty` reverses the list.

use crate::{
    repr::{Empty, Node, TypeList},
    traits::BinaryOp,
};

/// Reduces a list to a single type, starting from `Init`.
#[diagnostic::on_unimplemented(
    message = "cannot fold `{Self}` with `{Op}` from `{Init}`",
    label = "`{Op}` must be a `BinaryOp` for every element and intermediate accumulator"
)]
pub trait Foldl<Op, Init>: TypeList {
    type Output;
}

impl<Op, Init> Foldl<Op, Init> for Empty {
    type Output = Init;
}

impl<H, T, Op, Init> Foldl<Op, Init> for Node<H, T>
where
    T: Foldl<Op, <Op as BinaryOp<H, Init>>::Output>,
    Op: BinaryOp<H, Init>,
{
    type Output = <T as Foldl<Op, <Op as BinaryOp<H, Init>>::Output>>::Output;
}

pub type FoldlOut<L, Op, Init> = <L as Foldl<Op, Init>>::Output;
