//! Expression state machine.
//!
//! Two string buffers back the display: `current` holds the operand being
//! typed (or the last result) and `total` holds every operand and operator
//! entered before it. Operators only ever live at the end of `total`.

use crate::config::{CalcSettings, MAX_PRECISION};
use crate::display::Display;
use crate::error::{CalcError, Result};
use crate::expr;
use crate::greeting::pick_greeting;
use crate::input::{Input, Operator};

/// Shown on the main line after any failed operation.
pub const ERROR_MESSAGE: &str = "ERROR (￢_￢;)";

/// Value of the main line after a clear.
pub const DEFAULT_VALUE: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Just launched; the main line shows a greeting.
    Fresh,
    Entering,
    /// The main line shows [`ERROR_MESSAGE`]; the next input clears.
    Error,
}

#[derive(Debug, Clone)]
pub struct Calculator {
    current: String,
    total: String,
    state: State,
    precision: u32,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// A calculator with default settings, greeting included.
    pub fn new() -> Self {
        Self::with_settings(&CalcSettings::default())
    }

    pub fn with_settings(settings: &CalcSettings) -> Self {
        let mut calc = Self {
            current: DEFAULT_VALUE.to_string(),
            total: String::new(),
            state: State::Entering,
            precision: settings.precision.min(MAX_PRECISION),
        };
        if settings.show_greeting {
            calc.current = pick_greeting().to_string();
            calc.state = State::Fresh;
        }
        calc
    }

    pub fn current_expression(&self) -> &str {
        &self.current
    }

    pub fn total_expression(&self) -> &str {
        &self.total
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_error(&self) -> bool {
        self.state == State::Error
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn display(&self) -> Display<'_> {
        Display::of(self)
    }

    /// Run one input. While in the error state every input clears instead.
    pub fn apply(&mut self, input: Input) {
        if self.is_error() {
            tracing::debug!(?input, "input while in error state, clearing");
            self.clear();
            return;
        }
        match input {
            Input::Digit(d) => self.append_digit(d),
            Input::Operator(op) => self.append_operator(op),
            Input::Evaluate => self.evaluate(),
            Input::ClearEntry => self.clear_entry(),
            Input::Clear => self.clear(),
            Input::Square => self.square(),
            Input::Sqrt => self.sqrt(),
        }
    }

    /// Append a digit or decimal point to the current operand.
    pub fn append_digit(&mut self, d: char) {
        if !(d.is_ascii_digit() || d == '.') {
            return;
        }
        if self.state != State::Entering {
            self.clear();
        }

        if self.current.is_empty() || self.current == DEFAULT_VALUE {
            self.current = match d {
                '.' => "0.".to_string(),
                _ => d.to_string(),
            };
            return;
        }

        if d == '.' && self.current.contains('.') {
            return;
        }
        self.current.push(d);
    }

    /// Move the current operand and `op` onto the total, or swap the
    /// trailing operator when no operand was typed since the last one.
    pub fn append_operator(&mut self, op: Operator) {
        if self.state != State::Entering {
            self.clear();
        }
        if self.current.is_empty() && self.total.is_empty() {
            return;
        }

        let ends_with_operator = self
            .total
            .chars()
            .last()
            .is_some_and(|c| Operator::from_char(c).is_some());

        if self.current.is_empty() && ends_with_operator {
            self.total.pop();
            self.total.push(op.token());
        } else {
            self.total.push_str(&self.current);
            self.total.push(op.token());
            self.current.clear();
        }
    }

    /// Reset both buffers.
    pub fn clear(&mut self) {
        self.current = DEFAULT_VALUE.to_string();
        self.total.clear();
        self.state = State::Entering;
    }

    /// Backspace on the current operand. The total is left alone.
    pub fn clear_entry(&mut self) {
        match self.state {
            State::Error => self.clear(),
            State::Fresh => {
                self.current = DEFAULT_VALUE.to_string();
                self.state = State::Entering;
            }
            State::Entering => {
                if self.current.chars().count() > 1 && self.current != DEFAULT_VALUE {
                    self.current.pop();
                    if self.current == "-" {
                        self.current = DEFAULT_VALUE.to_string();
                    }
                } else {
                    self.current = DEFAULT_VALUE.to_string();
                }
            }
        }
    }

    pub fn square(&mut self) {
        let result = self.operand().and_then(|v| self.finish(v * v));
        self.settle_unary(result);
    }

    pub fn sqrt(&mut self) {
        let result = self.operand().and_then(|v| {
            if v < 0.0 {
                return Err(CalcError::NegativeRoot);
            }
            self.finish(v.sqrt())
        });
        self.settle_unary(result);
    }

    /// Append the current operand to the total and evaluate it.
    pub fn evaluate(&mut self) {
        match self.state {
            State::Error => {
                self.clear();
                return;
            }
            State::Fresh => self.clear(),
            State::Entering => {}
        }

        self.total.push_str(&self.current);
        match expr::evaluate(&self.total).and_then(|v| self.finish(v)) {
            Ok(result) => {
                tracing::debug!(expression = %self.total, %result, "evaluated");
                self.current = result;
                self.total.clear();
            }
            Err(err) => self.fail(err),
        }
    }

    fn operand(&self) -> Result<f64> {
        let value: f64 = self
            .current
            .parse()
            .map_err(|_| CalcError::Parse(format!("'{}' is not a number", self.current)))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::NonFinite)
        }
    }

    fn finish(&self, value: f64) -> Result<String> {
        if value.is_finite() {
            Ok(expr::format_number(value, self.precision))
        } else {
            Err(CalcError::NonFinite)
        }
    }

    fn settle_unary(&mut self, result: Result<String>) {
        match result {
            Ok(value) => {
                self.current = value;
                self.state = State::Entering;
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: CalcError) {
        tracing::debug!(
            current = %self.current,
            total = %self.total,
            error = %err,
            "entering error state"
        );
        self.current = ERROR_MESSAGE.to_string();
        self.state = State::Error;
    }
}
