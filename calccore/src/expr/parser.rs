//! Recursive descent parser that evaluates as it goes.
//!
//! ```text
//! expression ::= term (('+' | '-') term)*
//! term       ::= unary (('*' | '/') unary)*
//! unary      ::= ('-' | '+') unary | primary
//! primary    ::= NUMBER | '(' expression ')'
//! ```
//!
//! Operator chains are folded into an accumulator instead of a tree, so only
//! parentheses and unary signs add stack depth.

use super::lexer::Token;
use crate::error::{CalcError, Result};
use crate::input::Operator;

/// Nesting limit for parentheses and unary signs.
const MAX_DEPTH: usize = 256;

/// Apply one binary operator. Any non-finite result is an error.
pub fn apply(left: f64, op: Operator, right: f64) -> Result<f64> {
    let value = match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => {
            if right == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            left / right
        }
    };
    finite(value)
}

fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite)
    }
}

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Evaluate the full token stream; leftover tokens are an error.
    pub fn evaluate(mut self) -> Result<f64> {
        if self.tokens.is_empty() {
            return Err(CalcError::Parse("empty expression".into()));
        }
        let value = self.expression()?;
        match self.peek() {
            None => Ok(value),
            Some(token) => Err(CalcError::Parse(format!(
                "unexpected {} at token {}",
                describe(token),
                self.pos
            ))),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expression(&mut self) -> Result<f64> {
        let mut acc = self.term()?;
        while let Some(Token::Operator(op @ (Operator::Add | Operator::Subtract))) = self.peek() {
            let op = *op;
            self.pos += 1;
            let right = self.term()?;
            acc = apply(acc, op, right)?;
        }
        Ok(acc)
    }

    fn term(&mut self) -> Result<f64> {
        let mut acc = self.unary()?;
        while let Some(Token::Operator(op @ (Operator::Multiply | Operator::Divide))) = self.peek()
        {
            let op = *op;
            self.pos += 1;
            let right = self.unary()?;
            acc = apply(acc, op, right)?;
        }
        Ok(acc)
    }

    fn unary(&mut self) -> Result<f64> {
        match self.peek() {
            Some(Token::Operator(Operator::Subtract)) => {
                self.pos += 1;
                let inner = self.nested(Self::unary)?;
                Ok(-inner)
            }
            Some(Token::Operator(Operator::Add)) => {
                self.pos += 1;
                self.nested(Self::unary)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64> {
        match self.next() {
            Some(Token::Number(n)) => finite(n),
            Some(Token::LeftParen) => {
                let inner = self.nested(Self::expression)?;
                match self.next() {
                    Some(Token::RightParen) => Ok(inner),
                    Some(token) => Err(CalcError::Parse(format!(
                        "expected ')' but found {}",
                        describe(&token)
                    ))),
                    None => Err(CalcError::Parse("unclosed parenthesis".into())),
                }
            }
            Some(token) => Err(CalcError::Parse(format!("unexpected {}", describe(&token)))),
            None => Err(CalcError::Parse("unexpected end of expression".into())),
        }
    }

    fn nested(&mut self, rule: fn(&mut Self) -> Result<f64>) -> Result<f64> {
        if self.depth >= MAX_DEPTH {
            return Err(CalcError::Parse("expression nested too deeply".into()));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(n) => format!("number {n}"),
        Token::Operator(op) => format!("operator '{}'", op.token()),
        Token::LeftParen => "'('".to_string(),
        Token::RightParen => "')'".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::lexer::Lexer;

    fn eval(s: &str) -> Result<f64> {
        Parser::new(Lexer::new(s).tokenize()?).evaluate()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("12+7*3"), Ok(33.0));
        assert_eq!(eval("2*3+4"), Ok(10.0));
        assert_eq!(eval("8/2/2"), Ok(2.0));
        assert_eq!(eval("10-4-3"), Ok(3.0));
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(eval("(2+3)*4"), Ok(20.0));
        assert_eq!(eval("((1))"), Ok(1.0));
        assert!(matches!(eval("(1+2"), Err(CalcError::Parse(_))));
        assert!(matches!(eval("1+2)"), Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_unary_signs() {
        assert_eq!(eval("-4+3"), Ok(-1.0));
        assert_eq!(eval("2*-3"), Ok(-6.0));
        assert_eq!(eval("--2"), Ok(2.0));
        assert_eq!(eval("+5"), Ok(5.0));
    }

    #[test]
    fn test_apply() {
        assert_eq!(apply(1.0, Operator::Subtract, 2.0), Ok(-1.0));
        assert_eq!(apply(1.0, Operator::Divide, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(apply(f64::MAX, Operator::Add, f64::MAX), Err(CalcError::NonFinite));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("10/0"), Err(CalcError::DivisionByZero));
        assert_eq!(eval("1/(2-2)"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_overflow_is_non_finite() {
        let big = format!("{}*{}", f64::MAX, f64::MAX);
        assert_eq!(eval(&big), Err(CalcError::NonFinite));
    }

    #[test]
    fn test_malformed() {
        assert!(eval("").is_err());
        assert!(eval("5+").is_err());
        assert!(eval("*5").is_err());
        assert!(eval("1.2.3").is_err());
        assert!(eval("()").is_err());
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let deep = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
        assert!(matches!(eval(&deep), Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_long_chains_do_not_recurse() {
        let sum = vec!["1"; 100_000].join("+");
        assert_eq!(eval(&sum), Ok(100_000.0));

        let product = vec!["1"; 100_000].join("*");
        assert_eq!(eval(&product), Ok(1.0));

        let mixed = vec!["2*3"; 100_000].join("-");
        assert_eq!(eval(&mixed), Ok(6.0 - 6.0 * 99_999.0));
    }
}
