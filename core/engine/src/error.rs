//! FILENAME: core/engine/src/error.rs

use parser::ParseError;
use thiserror::Error;

/// Errors returned by the public evaluation entry points.
#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
