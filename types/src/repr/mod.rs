//! Representation of type lists and the type-level values they carry.
//!
//! - [`TypeList`]: the sealed list shape, [`Empty`] or [`Node`]
//! - [`Bit`]: compile-time booleans, [`True`] and [`False`]
//! - [`Nat`] and [`Value`]: compile-time unsigned integers
//! - [`Same`]: exact type identity over a declared universe

mod bit;
mod list;
mod nat;
mod same;

pub use bit::{And, Bit, False, Not, Or, True};
pub use list::{Empty, First, Node, NonEmpty, Rest, TypeList};
pub use nat::{
    Const, MaxOut, N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, N10, N11, N12, N13, N14, N15, N16, Nat,
    NatMax, S, Value, Z,
};
pub use same::{IsSame, RefSame, Same};
