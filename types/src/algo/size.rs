use crate::{
    algo::fold::{Foldl, FoldlOut},
    repr::{Nat, S, Value, Z},
    traits::BinaryOp,
};

/// Fold step that ignores the element and counts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

impl<E, N: Nat> BinaryOp<E, N> for Count {
    type Output = S<N>;
}

/// The number of elements in a list.
pub trait Size: Foldl<Count, Z> {
    /// The length as a Peano natural.
    type Output: Nat;

    const VALUE: usize = <<Self as Size>::Output as Value>::VALUE;
}

impl<L> Size for L
where
    L: Foldl<Count, Z>,
    FoldlOut<L, Count, Z>: Nat,
{
    type Output = FoldlOut<L, Count, Z>;
}

pub type Len<L> = <L as Size>::Output;

/// Number of elements in `L`.
pub const fn size<L: Size>() -> usize {
    <L as Size>::VALUE
}
