//! Algorithms over type lists.
//!
//! [`Foldl`] is the primitive traversal; [`Size`], [`Contains`] and
//! [`Reverse`] are folds with a dedicated step ([`Count`], [`Find`],
//! [`Push`]). [`Equal`] walks two lists at once and [`Transform`] rebuilds a
//! list in order, so both recurse structurally.

mod contains;
mod equal;
mod fold;
mod reverse;
mod size;
mod transform;

pub use contains::{Contains, ContainsOut, Find, contains};
pub use equal::{Equal, EqualOut, equal};
pub use fold::{Foldl, FoldlOut};
pub use reverse::{Push, Reverse, Reversed};
pub use size::{Count, Len, Size, size};
pub use transform::{Transform, Transformed};
