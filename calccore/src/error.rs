//! Errors raised while evaluating the current or total expression.
//!
//! Every variant collapses to the same on-screen sentinel; the variant only
//! exists so the cause can be logged.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("invalid expression: {0}")]
    Parse(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    NonFinite,
    #[error("square root of a negative number")]
    NegativeRoot,
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            CalcError::Parse("unexpected ')'".into()).to_string(),
            "invalid expression: unexpected ')'"
        );
    }
}
