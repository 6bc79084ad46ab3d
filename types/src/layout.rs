//! Memory layout characteristics of the types in a list.
//!
//! Elements are mapped to their size or alignment with [`ToSize`] /
//! [`ToAlign`] and reduced with [`Greatest`], all at compile time:
//!
//! ```
//! use typeseq_types::{largest, make, most_aligned};
//!
//! type Scalars = make![u8, u64, i32, u32];
//!
//! const _: () = assert!(largest::<Scalars>() == 8);
//! const _: () = assert!(most_aligned::<Scalars>() == core::mem::align_of::<u64>());
//! ```

use core::marker::PhantomData;

use crate::{
    algo::{Foldl, FoldlOut, Transform, Transformed},
    repr::{Const, Value},
    traits::{BinaryOp, UnaryOp},
};

/// `size_of::<T>()` as a [`Value`].
pub struct SizeOf<T>(PhantomData<fn() -> T>);

impl<T> Value for SizeOf<T> {
    const VALUE: usize = core::mem::size_of::<T>();
}

/// `align_of::<T>()` as a [`Value`].
pub struct AlignOf<T>(PhantomData<fn() -> T>);

impl<T> Value for AlignOf<T> {
    const VALUE: usize = core::mem::align_of::<T>();
}

/// The larger of two [`Value`]s.
pub struct MaxOf<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: Value, B: Value> Value for MaxOf<A, B> {
    const VALUE: usize = if A::VALUE >= B::VALUE { A::VALUE } else { B::VALUE };
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ToSize;

impl<T> UnaryOp<T> for ToSize {
    type Output = SizeOf<T>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ToAlign;

impl<T> UnaryOp<T> for ToAlign {
    type Output = AlignOf<T>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Greatest;

impl<E: Value, Acc: Value> BinaryOp<E, Acc> for Greatest {
    type Output = MaxOf<E, Acc>;
}

/// Size of the largest element, `Const<0>` for the empty list.
pub type Largest<L> = FoldlOut<Transformed<L, ToSize>, Greatest, Const<0>>;

/// Alignment of the most strictly aligned element, `Const<0>` for the empty
/// list.
pub type MostAligned<L> = FoldlOut<Transformed<L, ToAlign>, Greatest, Const<0>>;

pub const fn largest<L>() -> usize
where
    L: Transform<ToSize>,
    Transformed<L, ToSize>: Foldl<Greatest, Const<0>>,
    Largest<L>: Value,
{
    <Largest<L> as Value>::VALUE
}

pub const fn most_aligned<L>() -> usize
where
    L: Transform<ToAlign>,
    Transformed<L, ToAlign>: Foldl<Greatest, Const<0>>,
    MostAligned<L>: Value,
{
    <MostAligned<L> as Value>::VALUE
}
