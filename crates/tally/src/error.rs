//! Error types for calculation.

use thiserror::Error;

/// Errors that can occur while evaluating a calculation.
///
/// Both variants are recoverable: the calculator rejects the operation and
/// leaves its accumulator and history exactly as they were.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("cannot divide by zero")]
    DivisionByZero,

    #[error("unsupported operator `{0}`")]
    UnsupportedOperator(String),
}
