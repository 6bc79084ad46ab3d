//! Operation descriptors consumed by the list algorithms.

mod op;

pub use op::{Apply, Apply2, BinaryOp, Identity, Inc, Max, UnaryOp};
