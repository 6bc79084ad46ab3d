use core::marker::PhantomData;

use crate::{
    algo::fold::{Foldl, FoldlOut},
    repr::{Bit, False, IsSame, Or, Same},
    traits::BinaryOp,
};

/// Fold step that records whether any element so far is exactly `E`.
pub struct Find<E>(PhantomData<fn() -> E>);

impl<E, Elem, Acc> BinaryOp<Elem, Acc> for Find<E>
where
    Elem: Same<E>,
    Acc: Bit,
{
    type Output = Or<Acc, IsSame<Elem, E>>;
}

/// Membership test by exact type identity.
///
/// `Output` is [`True`](crate::True) iff some element of the list is `E`
/// itself; an element that merely converts to `E` does not count.
pub trait Contains<E>: Foldl<Find<E>, False> {
    type Output: Bit;

    const VALUE: bool = <<Self as Contains<E>>::Output as Bit>::VALUE;
}

impl<L, E> Contains<E> for L
where
    L: Foldl<Find<E>, False>,
    FoldlOut<L, Find<E>, False>: Bit,
{
    type Output = FoldlOut<L, Find<E>, False>;
}

pub type ContainsOut<L, E> = <L as Contains<E>>::Output;

/// Whether `L` has an element that is exactly `E`.
pub const fn contains<L: Contains<E>, E>() -> bool {
    <L as Contains<E>>::VALUE
}
