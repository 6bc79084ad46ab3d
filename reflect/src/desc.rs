use core::{
    any::{TypeId, type_name},
    fmt,
    hash::{Hash, Hasher},
    mem::{align_of, size_of},
};

use typeseq_types::{Empty, Node, TypeList};

use crate::list::DynTypeList;

/// Run-time description of a `'static` type.
///
/// Two descriptors are equal iff they describe the same type; the name,
/// size and alignment are carried for diagnostics and layout queries only.
#[derive(Clone, Copy)]
pub struct TypeDesc {
    id: TypeId,
    name: &'static str,
    size: usize,
    align: usize,
}

impl TypeDesc {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            size: size_of::<T>(),
            align: align_of::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn align(&self) -> usize {
        self.align
    }

    /// Whether this describes exactly `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeDesc {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDesc {}

impl Hash for TypeDesc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Lowers a compile-time type list to descriptors, in order.
pub trait Reflect: TypeList {
    fn describe_into(out: &mut DynTypeList);
}

impl Reflect for Empty {
    fn describe_into(_out: &mut DynTypeList) {}
}

impl<H: 'static, T: Reflect> Reflect for Node<H, T> {
    fn describe_into(out: &mut DynTypeList) {
        out.push_back(TypeDesc::of::<H>());
        T::describe_into(out);
    }
}
