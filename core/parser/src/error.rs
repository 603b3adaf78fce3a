//! FILENAME: core/parser/src/error.rs
//! PURPOSE: Error types for the lexing and parsing pipeline.

use thiserror::Error;

/// Errors raised while tokenizing or parsing an expression.
///
/// Both variants abort the current evaluation; there is no recovery or
/// resynchronization. The first error wins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A whitespace-delimited chunk that is neither an operator, a
    /// parenthesis, nor a valid number. Carries the whole offending chunk.
    #[error("Invalid token: '{raw}'")]
    InvalidToken { raw: String },

    /// The token stream does not form a complete expression: an operator
    /// without an operand, an unmatched ')' at the outermost level, an
    /// empty group, or empty input.
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),
}
