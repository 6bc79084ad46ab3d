//! Run-time type lists.
//!
//! `typeseq_types` decides identity at compile time, which limits
//! [`contains`](typeseq_types::contains) and [`equal`](typeseq_types::equal)
//! to types with a declared identity relation. This crate lowers any list of
//! `'static` types to a [`DynTypeList`] of [`TypeDesc`]s, where identity is
//! a [`TypeId`](core::any::TypeId) comparison. The price is that misuse is
//! reported as an [`Error`] at run time instead of rejecting the program.
//!
//! ```
//! use typeseq_reflect::{DynTypeList, TypeDesc};
//! use typeseq_types::make;
//!
//! struct Opaque;
//!
//! let list = DynTypeList::of::<make![char, Opaque, u32]>();
//! assert_eq!(list.len(), 3);
//! assert!(list.contains_type::<Opaque>());
//! assert!(!list.contains(&TypeDesc::of::<&str>()));
//! assert_eq!(list.largest_size(), 4);
//! ```

#![no_std]

mod desc;
mod error;
mod list;
mod op;

pub use desc::{Reflect, TypeDesc};
pub use error::Error;
pub use list::DynTypeList;
pub use op::{DynBinaryOp, DynUnaryOp, Identity, MaxAlign, MaxSize, Table};
