//! Core calculator engine: tokens, operations, state machine, history.

pub mod engine;
pub mod history;
mod ops;
mod token;

pub use engine::{Engine, Phase};
pub use ops::BinaryOp;
pub use token::Token;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// An operand string is not a finite decimal literal
    #[error("Invalid operand: {0:?}")]
    ParseError(String),
    /// Result overflowed the representable range (infinity)
    #[error("Overflow: result exceeds representable range")]
    Overflow,
    /// Result is not a number (NaN or similar)
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    /// A symbol outside the keypad vocabulary was fed to a session
    #[error("Unrecognized key symbol {0:?}")]
    UnknownSymbol(char),
}
