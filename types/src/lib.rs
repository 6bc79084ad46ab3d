//! Compile-time lists of types.
//!
//! A type list is a chain of [`Node`]s ending in [`Empty`], built with
//! [`make!`]. Algorithms over lists are traits whose results are associated
//! types and constants, so everything is resolved while the program is
//! compiled:
//!
//! - [`size`]: number of elements
//! - [`contains`]: membership by exact type identity
//! - [`equal`]: positional equality of two lists
//! - [`Transformed`]: every element mapped through a [`UnaryOp`]
//! - [`FoldlOut`]: left fold with a [`BinaryOp`], applied as `Op(element, acc)`
//!
//! # Example
//!
//! ```
//! use typeseq_types::{contains, equal, make, size, Inc, Transformed, N1, N2, N3, N4};
//!
//! type Numbers = make![N1, N2, N3];
//! type PlusOne = Transformed<Numbers, Inc>;
//!
//! const _: () = assert!(size::<Numbers>() == 3);
//! const _: () = assert!(contains::<Numbers, N1>());
//! const _: () = assert!(!contains::<PlusOne, N1>());
//! const _: () = assert!(contains::<PlusOne, N4>());
//! const _: () = assert!(equal::<PlusOne, make![N2, N3, N4]>());
//! ```
//!
//! Misuse is rejected where it happens rather than deep inside a recursion:
//!
//! ```compile_fail,E0277
//! use typeseq_types::size;
//!
//! // `(u8, char)` is not a type list.
//! const N: usize = size::<(u8, char)>();
//! ```
//!
//! ```compile_fail,E0277
//! use typeseq_types::Node;
//!
//! // A tail must itself be a type list.
//! fn broken(_: Node<u8, char>) {}
//! ```
//!
//! ```compile_fail,E0277
//! use typeseq_types::{make, Inc, Transformed};
//!
//! // `Inc` is only defined on naturals.
//! type Bad = Transformed<make![char], Inc>;
//! fn use_it(_: Bad) {}
//! ```
//!
//! ```compile_fail,E0277
//! use typeseq_types::{make, FoldlOut, Max, N0};
//!
//! // `Max` combines naturals, and `char` is not one.
//! type Bad = FoldlOut<make![char], Max, N0>;
//! fn use_it(_: Bad) {}
//! ```

#![no_std]

pub mod algo;
pub mod layout;
mod macros;
pub mod repr;
pub mod traits;

pub use algo::{
    Contains, ContainsOut, Equal, EqualOut, Foldl, FoldlOut, Len, Reverse, Reversed, Size,
    Transform, Transformed, contains, equal, size,
};
pub use layout::{Largest, MostAligned, largest, most_aligned};
pub use repr::{
    And, Bit, Const, Empty, False, First, IsSame, N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10,
    N11, N12, N13, N14, N15, N16, Nat, Node, NonEmpty, Not, Or, RefSame, Rest, S, Same, True,
    TypeList, Value, Z,
};
pub use traits::{Apply, Apply2, BinaryOp, Identity, Inc, Max, UnaryOp};
