//! typeseq - compile-time lists of types
//!
//! # Overview
//!
//! A type list is an immutable, singly linked chain of types that exists
//! only while the program is compiled. Lists are built with [`make!`] and
//! queried with traits whose answers are associated types and constants:
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`size`] / [`Len`] | number of elements |
//! | [`contains`] / [`ContainsOut`] | membership by exact type identity |
//! | [`equal`] / [`EqualOut`] | positional equality of two lists |
//! | [`Transformed`] | each element mapped through a [`UnaryOp`] |
//! | [`FoldlOut`] | left fold with a [`BinaryOp`], applied as `Op(element, acc)` |
//! | [`First`] / [`Rest`] | head and tail of a non-empty list |
//!
//! # Quick Start
//!
//! ```
//! use typeseq::{make, most_aligned, largest, size, contains, equal, Transformed, Inc};
//! use typeseq::{N1, N2, N3, N4};
//!
//! type Numbers = make![N1, N2, N3];
//! type PlusOne = Transformed<Numbers, Inc>;
//!
//! const _: () = assert!(size::<Numbers>() == 3);
//! const _: () = assert!(!contains::<PlusOne, N1>() && contains::<PlusOne, N4>());
//! const _: () = assert!(equal::<PlusOne, make![N2, N3, N4]>());
//!
//! type Scalars = make![char, i64, i32, u32];
//! assert_eq!(largest::<Scalars>(), 8);
//! assert_eq!(most_aligned::<Scalars>(), core::mem::align_of::<i64>());
//! ```
//!
//! # Crates
//!
//! - [`typeseq_types`]: the compile-time facility, re-exported at the root
//! - `reflect` (feature `reflect`, on by default): the same algebra over
//!   run-time type descriptors, for element types without a compile-time
//!   identity relation

pub use typeseq_types::*;

#[cfg(feature = "reflect")]
pub use typeseq_reflect as reflect;
