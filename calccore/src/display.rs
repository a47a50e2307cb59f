//! Read-only projection of the calculator state onto the two labels.
//!
//! Truncation counts characters rather than bytes: the greeting and the
//! error sentinel both contain multi-byte characters, and slicing them on a
//! byte index would panic.

use crate::machine::Calculator;

/// Maximum number of characters shown on the main line.
pub const MAX_CURRENT_CHARS: usize = 14;

/// What the two display labels show after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display<'a> {
    pub total: &'a str,
    pub current: &'a str,
}

impl<'a> Display<'a> {
    pub fn of(calc: &'a Calculator) -> Self {
        Self {
            total: calc.total_expression(),
            current: truncate_chars(calc.current_expression(), MAX_CURRENT_CHARS),
        }
    }
}

/// The first `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte_pos, _)) => &s[..byte_pos],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello", 100), "hello");
        assert_eq!(truncate_chars("", 14), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        // '￢' is 3 bytes in UTF-8
        assert_eq!(truncate_chars("(￢_￢;)", 2), "(￢");
        assert_eq!(truncate_chars("(˘︶˘).｡.:*♡", 14), "(˘︶˘).｡.:*♡");
    }

    #[test]
    fn test_projection_truncates_current_only() {
        let mut calc = Calculator::new();
        for c in "1234567890123456".chars() {
            calc.append_digit(c);
        }
        calc.append_operator(crate::Operator::Add);
        for c in "98765432109876".chars() {
            calc.append_digit(c);
        }
        calc.append_digit('5');

        let display = Display::of(&calc);
        assert_eq!(display.total, "1234567890123456+");
        assert_eq!(display.current, "98765432109876");
        assert_eq!(calc.current_expression(), "987654321098765");
    }
}
