use crate::{
    repr::{Empty, Node, TypeList},
    traits::UnaryOp,
};

/// Maps every element of a list through a unary operation.
///
/// The result has the same length and order as the input; element `i` of
/// the output is `Op` applied to element `i` of the input. `Op` must be
/// defined for every element, otherwise the program is rejected.
#[diagnostic::on_unimplemented(
    message = "cannot transform `{Self}` with `{Op}`",
    label = "`{Op}` must be a `UnaryOp` for every element of the list"
)]
pub trait Transform<Op>: TypeList {
    type Output: TypeList;
}

impl<Op> Transform<Op> for Empty {
    type Output = Empty;
}

impl<H, T, Op> Transform<Op> for Node<H, T>
where
    T: Transform<Op>,
    Op: UnaryOp<H>,
{
    type Output = Node<<Op as UnaryOp<H>>::Output, <T as Transform<Op>>::Output>;
}

pub type Transformed<L, Op> = <L as Transform<Op>>::Output;
