// src/error.rs
use thiserror::Error;
use varpath_path::PathSyntaxError;

/// The error type for everything built on top of the path engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Path error: {0}")]
    Path(#[from] PathSyntaxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Instruction {index} ('{operator}' at '{path}') failed: {source}")]
    Instruction {
        index: usize,
        path: String,
        operator: String,
        #[source]
        source: PathSyntaxError,
    },
}
