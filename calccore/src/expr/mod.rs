//! Restricted arithmetic evaluator.
//!
//! Accepts numeric literals, `+ - * /`, unary signs and parentheses. There
//! are no identifiers or function calls, so nothing typed into the display
//! can do more than arithmetic.

mod lexer;
mod parser;

pub use lexer::{Lexer, Token};
pub use parser::{apply, Parser};

use crate::error::Result;

/// Parse and evaluate an infix expression such as `12+7*3`.
pub fn evaluate(input: &str) -> Result<f64> {
    let tokens = Lexer::new(input).tokenize()?;
    Parser::new(tokens).evaluate()
}

/// Round half away from zero to `precision` decimal places.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Round and render a result the way the display shows it: no exponent,
/// no trailing `.0`, and never `-0`.
pub fn format_number(value: f64, precision: u32) -> String {
    let rounded = round_to(value, precision);
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate("12+7"), Ok(19.0));
        assert_eq!(evaluate("0.+1"), Ok(1.0));
        assert_eq!(evaluate("10/0"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_long_sum() {
        let sum = vec!["1"; 200_000].join("+");
        assert_eq!(evaluate(&sum), Ok(200_000.0));
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(19.0, 2), "19");
        assert_eq!(format_number(25.0, 2), "25");
        assert_eq!(format_number(-4.0, 2), "-4");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(2.5, 2), "2.5");
        assert_eq!(format_number(0.1 + 0.2, 2), "0.3");
        assert_eq!(format_number(2f64.sqrt(), 2), "1.41");
        assert_eq!(format_number(2f64.sqrt(), 4), "1.4142");
        assert_eq!(format_number(2.0 / 3.0, 0), "1");
    }

    #[test]
    fn test_huge_precision_keeps_value() {
        assert_eq!(round_to(1.5, u32::MAX), 1.5);
        assert_eq!(format_number(2.25, 1 << 31), "2.25");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.001, 2), "0");
        assert_eq!(format_number(-0.0, 2), "0");
    }

    #[test]
    fn test_format_has_no_exponent() {
        let s = format_number(1e20, 2);
        assert_eq!(s, "100000000000000000000");
        assert_eq!(evaluate(&s), Ok(1e20));
    }
}
