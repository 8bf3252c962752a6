use thiserror::Error;

/// A path string that does not match the path grammar.
///
/// Positions are token offsets into the lexed path, starting at 0.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathSyntaxError {
    #[error("Path is empty")]
    Empty,

    #[error("Invalid path '{path}': expected {expected} at token {position}, found {found}")]
    UnexpectedToken {
        path: String,
        position: usize,
        expected: &'static str,
        found: String,
    },

    #[error("Invalid path '{path}': '{literal}' is not an integer index")]
    InvalidIndex { path: String, literal: String },
}
