//! Type-level booleans.
//!
//! Every combinator resolves to one of the two canonical types, so results
//! can be compared with exact type identity as well as read as constants.

use super::list::private::Sealed;

/// A compile-time boolean: [`True`] or [`False`].
pub trait Bit: Sealed {
    const VALUE: bool;

    type Not: Bit;
    type And<B: Bit>: Bit;
    type Or<B: Bit>: Bit;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct False;

impl Sealed for True {}
impl Sealed for False {}

impl Bit for True {
    const VALUE: bool = true;

    type Not = False;
    type And<B: Bit> = B;
    type Or<B: Bit> = True;
}

impl Bit for False {
    const VALUE: bool = false;

    type Not = True;
    type And<B: Bit> = False;
    type Or<B: Bit> = B;
}

pub type Not<A> = <A as Bit>::Not;
pub type And<A, B> = <A as Bit>::And<B>;
pub type Or<A, B> = <A as Bit>::Or<B>;
