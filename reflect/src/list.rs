use core::{fmt, slice};

use smallvec::SmallVec;

use crate::{
    desc::{Reflect, TypeDesc},
    error::Error,
    op::{DynBinaryOp, DynUnaryOp, MaxAlign, MaxSize},
};

/// A list of type descriptors, checked at run time.
///
/// Mirrors the compile-time algebra of `typeseq_types` for element types
/// that have no compile-time identity relation. Every operation returns a
/// new list and leaves `self` untouched.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct DynTypeList {
    elements: SmallVec<[TypeDesc; 4]>,
}

impl DynTypeList {
    pub const fn new() -> Self {
        Self {
            elements: SmallVec::new_const(),
        }
    }

    /// Describes the compile-time list `L`.
    pub fn of<L: Reflect>() -> Self {
        let mut list = Self::new();
        L::describe_into(&mut list);
        list
    }

    pub(crate) fn push_back(&mut self, desc: TypeDesc) {
        self.elements.push(desc);
    }

    /// A new list with `head` in front of the elements of `self`.
    pub fn cons(&self, head: TypeDesc) -> Self {
        let mut elements = SmallVec::with_capacity(self.len() + 1);
        elements.push(head);
        elements.extend_from_slice(&self.elements);
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, TypeDesc> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[TypeDesc] {
        &self.elements
    }

    pub fn first(&self) -> Result<TypeDesc, Error> {
        self.elements
            .first()
            .copied()
            .ok_or(Error::EmptyList { op: "first" })
    }

    pub fn rest(&self) -> Result<Self, Error> {
        match self.elements.split_first() {
            Some((_, rest)) => Ok(rest.iter().copied().collect()),
            None => Err(Error::EmptyList { op: "rest" }),
        }
    }

    /// Whether some element is exactly `desc`.
    pub fn contains(&self, desc: &TypeDesc) -> bool {
        self.elements.contains(desc)
    }

    pub fn contains_type<T: 'static>(&self) -> bool {
        self.iter().any(TypeDesc::is::<T>)
    }

    /// Maps every element through `op`, keeping order.
    ///
    /// Fails without applying `op` at all if it does not accept some element.
    pub fn transform<Op: DynUnaryOp + ?Sized>(&self, op: &Op) -> Result<Self, Error> {
        self.validate(op.name(), |elem| op.accepts(elem))?;
        tracing::trace!(op = op.name(), len = self.len(), "transform");
        Ok(self.iter().map(|elem| op.apply(elem)).collect())
    }

    /// Left fold applying `op.apply(element, accumulator)` front to back.
    ///
    /// Returns `init` untouched for the empty list. Fails without applying
    /// `op` at all if it does not accept some element.
    pub fn foldl<A, Op: DynBinaryOp<A> + ?Sized>(&self, op: &Op, init: A) -> Result<A, Error> {
        self.validate(op.name(), |elem| op.accepts(elem))?;
        tracing::trace!(op = op.name(), len = self.len(), "foldl");
        Ok(self.iter().fold(init, |acc, elem| op.apply(elem, acc)))
    }

    pub fn reverse(&self) -> Self {
        self.iter().rev().copied().collect()
    }

    /// Size of the largest element, 0 for the empty list.
    pub fn largest_size(&self) -> usize {
        // `MaxSize` accepts every element.
        self.foldl(&MaxSize, 0).unwrap_or(0)
    }

    /// Alignment of the most strictly aligned element, 0 for the empty list.
    pub fn strictest_alignment(&self) -> usize {
        // `MaxAlign` accepts every element.
        self.foldl(&MaxAlign, 0).unwrap_or(0)
    }

    fn validate(
        &self,
        op: &'static str,
        accepts: impl Fn(&TypeDesc) -> bool,
    ) -> Result<(), Error> {
        let Some(index) = self.iter().position(|elem| !accepts(elem)) else {
            return Ok(());
        };
        let element = self.elements[index].name();
        tracing::debug!(op, element, index, "operation rejected element");
        Err(Error::UndefinedOperation { op, element, index })
    }
}

impl FromIterator<TypeDesc> for DynTypeList {
    fn from_iter<I: IntoIterator<Item = TypeDesc>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DynTypeList {
    type Item = &'a TypeDesc;
    type IntoIter = slice::Iter<'a, TypeDesc>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for DynTypeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
