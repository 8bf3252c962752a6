use thiserror::Error;

/// Misuse of a [`crate::View`]: addressing something its shape does not declare.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("'{field}' is not a declared field of {path}")]
    UndeclaredField { path: String, field: String },

    #[error("{path} is declared as {kind}, not an object")]
    NotAnObject { path: String, kind: &'static str },

    #[error("{path} is declared as {kind}, not an array")]
    NotAnArray { path: String, kind: &'static str },
}
