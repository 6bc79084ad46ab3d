use crate::desc::TypeDesc;

/// Run-time counterpart of [`typeseq_types::UnaryOp`].
///
/// An operation may be partial: [`DynTypeList::transform`] checks `accepts`
/// for every element before applying it to any.
///
/// [`DynTypeList::transform`]: crate::DynTypeList::transform
pub trait DynUnaryOp {
    fn name(&self) -> &'static str;

    fn accepts(&self, _elem: &TypeDesc) -> bool {
        true
    }

    fn apply(&self, elem: &TypeDesc) -> TypeDesc;
}

/// Run-time counterpart of [`typeseq_types::BinaryOp`], folding into an
/// accumulator of type `A`. Applied as `apply(element, accumulator)`.
pub trait DynBinaryOp<A> {
    fn name(&self) -> &'static str;

    fn accepts(&self, _elem: &TypeDesc) -> bool {
        true
    }

    fn apply(&self, elem: &TypeDesc, acc: A) -> A;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl DynUnaryOp for Identity {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn apply(&self, elem: &TypeDesc) -> TypeDesc {
        *elem
    }
}

/// A unary operation given by a table of `(from, to)` pairs. Defined only on
/// the `from` types.
///
/// Calling [`apply`](DynUnaryOp::apply) directly on a type outside the table
/// is a logic error: debug builds panic, release builds return the element
/// unchanged. [`DynTypeList::transform`](crate::DynTypeList::transform)
/// rejects such elements with [`Error::UndefinedOperation`](crate::Error)
/// before applying anything.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    name: &'static str,
    entries: &'a [(TypeDesc, TypeDesc)],
}

impl<'a> Table<'a> {
    pub fn new(name: &'static str, entries: &'a [(TypeDesc, TypeDesc)]) -> Self {
        Self { name, entries }
    }

    fn lookup(&self, elem: &TypeDesc) -> Option<&TypeDesc> {
        self.entries
            .iter()
            .find_map(|(from, to)| (from == elem).then_some(to))
    }
}

impl DynUnaryOp for Table<'_> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn accepts(&self, elem: &TypeDesc) -> bool {
        self.lookup(elem).is_some()
    }

    fn apply(&self, elem: &TypeDesc) -> TypeDesc {
        debug_assert!(
            self.accepts(elem),
            "`{}` is not defined on `{}`",
            self.name,
            elem
        );
        self.lookup(elem).copied().unwrap_or(*elem)
    }
}

/// Keeps the largest element size seen so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxSize;

impl DynBinaryOp<usize> for MaxSize {
    fn name(&self) -> &'static str {
        "max_size"
    }

    fn apply(&self, elem: &TypeDesc, acc: usize) -> usize {
        elem.size().max(acc)
    }
}

/// Keeps the strictest element alignment seen so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxAlign;

impl DynBinaryOp<usize> for MaxAlign {
    fn name(&self) -> &'static str {
        "max_align"
    }

    fn apply(&self, elem: &TypeDesc, acc: usize) -> usize {
        elem.align().max(acc)
    }
}
