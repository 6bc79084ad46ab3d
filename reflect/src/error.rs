use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("`{op}` requires a non-empty type list")]
    EmptyList { op: &'static str },

    #[error("operation `{op}` is not defined for element {index} (`{element}`)")]
    UndefinedOperation {
        op: &'static str,
        element: &'static str,
        index: usize,
    },
}
