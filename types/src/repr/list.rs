use core::{fmt, marker::PhantomData};

pub(crate) mod private {
    pub trait Sealed {}
}

/// A compile-time list of types.
///
/// Only two shapes implement this trait: [`Empty`], which terminates every
/// list, and [`Node`], whose tail must itself be a `TypeList`. The trait is
/// sealed, so every implementor is a finite chain ending in exactly one
/// `Empty`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a well-formed type list",
    label = "expected `Empty` or a `Node<Head, Tail>` chain ending in `Empty`",
    note = "build lists with `make![T0, T1, ...]`"
)]
pub trait TypeList: private::Sealed {
    /// `true` only for [`Empty`].
    const IS_EMPTY: bool;

    #[doc(hidden)]
    fn fmt_elements(f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A type list with at least one element.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no first element",
    label = "`First` and `Rest` are only defined for non-empty lists"
)]
pub trait NonEmpty: TypeList {
    /// The leading element.
    type First;
    /// The remaining elements.
    type Rest: TypeList;
}

/// The leading element of a non-empty list.
pub type First<L> = <L as NonEmpty>::First;

/// Everything after the leading element of a non-empty list.
pub type Rest<L> = <L as NonEmpty>::Rest;

/// The list with no elements.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Empty;

impl fmt::Debug for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("make![]")
    }
}

impl private::Sealed for Empty {}

impl TypeList for Empty {
    const IS_EMPTY: bool = true;

    fn fmt_elements(_f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// A cons cell: `H` followed by the list `T`.
///
/// `Node` is zero-sized and never holds a value of `H`; the `fn() -> _`
/// phantom keeps it `Send + Sync + Copy` whatever the elements are.
pub struct Node<H, T: TypeList>(PhantomData<fn() -> (H, T)>);

impl<H, T: TypeList> Node<H, T> {
    pub const fn new() -> Self {
        Node(PhantomData)
    }
}

impl<H, T: TypeList> Clone for Node<H, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, T: TypeList> Copy for Node<H, T> {}

impl<H, T: TypeList> Default for Node<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, T: TypeList> fmt::Debug for Node<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("make![")?;
        Self::fmt_elements(f)?;
        f.write_str("]")
    }
}

impl<H, T: TypeList> private::Sealed for Node<H, T> {}

impl<H, T: TypeList> TypeList for Node<H, T> {
    const IS_EMPTY: bool = false;

    fn fmt_elements(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(core::any::type_name::<H>())?;
        if !T::IS_EMPTY {
            f.write_str(", ")?;
        }
        T::fmt_elements(f)
    }
}

impl<H, T: TypeList> NonEmpty for Node<H, T> {
    type First = H;
    type Rest = T;
}

static_assertions::assert_eq_size!(Empty, ());
static_assertions::assert_eq_size!(Node<u128, Node<[u64; 4], Empty>>, ());
static_assertions::assert_impl_all!(Node<*const u8, Empty>: Send, Sync, Copy);
