use crate::{
    algo::fold::{Foldl, FoldlOut},
    repr::{Empty, Node, TypeList},
    traits::BinaryOp,
};

/// Fold step that conses the element onto the accumulated list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Push;

impl<E, Acc: TypeList> BinaryOp<E, Acc> for Push {
    type Output = Node<E, Acc>;
}

/// The elements of a list in reverse order.
pub trait Reverse: Foldl<Push, Empty> {
    type Output: TypeList;
}

impl<L> Reverse for L
where
    L: Foldl<Push, Empty>,
    FoldlOut<L, Push, Empty>: TypeList,
{
    type Output = FoldlOut<L, Push, Empty>;
}

pub type Reversed<L> = <L as Reverse>::Output;
