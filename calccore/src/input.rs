//! Input symbols and the keypad layout.
//!
//! Buttons and keys both resolve to an [`Input`] through
//! [`Input::from_symbol`], so the GUI never calls state machine operations
//! directly.

/// The four binary operators the keypad can enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Character written into the total expression.
    pub fn token(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Character drawn on the button. Cosmetic only.
    pub fn glyph(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '\u{00D7}',
            Operator::Divide => '\u{00F7}',
        }
    }

    /// Accepts both the ASCII token and the display glyph.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | '\u{00D7}' => Some(Operator::Multiply),
            '/' | '\u{00F7}' => Some(Operator::Divide),
            _ => None,
        }
    }
}

/// One user action, from a button click or a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// `0`-`9` or `.`
    Digit(char),
    Operator(Operator),
    Evaluate,
    /// Backspace.
    ClearEntry,
    Clear,
    Square,
    Sqrt,
}

impl Input {
    /// Map a key or button symbol to an input.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let input = match symbol {
            "=" | "Return" | "Enter" => Input::Evaluate,
            "CE" | "BackSpace" | "Backspace" => Input::ClearEntry,
            "C" | "Escape" => Input::Clear,
            "x²" => Input::Square,
            "√x" => Input::Sqrt,
            _ => {
                let mut chars = symbol.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                return Self::from_char(c);
            }
        };
        Some(input)
    }

    /// Single-character form of [`Input::from_symbol`], for typed text.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_digit() || c == '.' {
            return Some(Input::Digit(c));
        }
        if c == '=' {
            return Some(Input::Evaluate);
        }
        Operator::from_char(c).map(Input::Operator)
    }
}

/// How a keypad button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Function,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: &'static str,
    pub input: Input,
    pub kind: ButtonKind,
    pub row: usize,
    pub col: usize,
    /// Number of grid columns the button covers.
    pub span: usize,
}

pub const KEYPAD_ROWS: usize = 5;
pub const KEYPAD_COLS: usize = 4;

const fn button(
    label: &'static str,
    input: Input,
    kind: ButtonKind,
    row: usize,
    col: usize,
) -> KeypadButton {
    KeypadButton { label, input, kind, row, col, span: 1 }
}

const fn digit(label: &'static str, c: char, row: usize, col: usize) -> KeypadButton {
    button(label, Input::Digit(c), ButtonKind::Digit, row, col)
}

const fn operator(label: &'static str, op: Operator, row: usize) -> KeypadButton {
    button(label, Input::Operator(op), ButtonKind::Operator, row, 3)
}

/// The keypad, row-major:
/// ```text
/// [CE] [x²] [√x] [÷]
/// [ 7] [ 8] [ 9] [×]
/// [ 4] [ 5] [ 6] [-]
/// [ 1] [ 2] [ 3] [+]
/// [ .] [ 0] [   =   ]
/// ```
pub static KEYPAD: [KeypadButton; 19] = [
    button("CE", Input::ClearEntry, ButtonKind::Function, 0, 0),
    button("x²", Input::Square, ButtonKind::Function, 0, 1),
    button("√x", Input::Sqrt, ButtonKind::Function, 0, 2),
    operator("\u{00F7}", Operator::Divide, 0),
    digit("7", '7', 1, 0),
    digit("8", '8', 1, 1),
    digit("9", '9', 1, 2),
    operator("\u{00D7}", Operator::Multiply, 1),
    digit("4", '4', 2, 0),
    digit("5", '5', 2, 1),
    digit("6", '6', 2, 2),
    operator("-", Operator::Subtract, 2),
    digit("1", '1', 3, 0),
    digit("2", '2', 3, 1),
    digit("3", '3', 3, 2),
    operator("+", Operator::Add, 3),
    digit(".", '.', 4, 0),
    digit("0", '0', 4, 1),
    KeypadButton {
        label: "=",
        input: Input::Evaluate,
        kind: ButtonKind::Equals,
        row: 4,
        col: 2,
        span: 2,
    },
];

/// Buttons of one keypad row, left to right.
pub fn keypad_row(row: usize) -> impl Iterator<Item = &'static KeypadButton> {
    KEYPAD.iter().filter(move |b| b.row == row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_glyphs_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_char(op.token()), Some(op));
            assert_eq!(Operator::from_char(op.glyph()), Some(op));
        }
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Input::from_symbol("7"), Some(Input::Digit('7')));
        assert_eq!(Input::from_symbol("."), Some(Input::Digit('.')));
        assert_eq!(Input::from_symbol("÷"), Some(Input::Operator(Operator::Divide)));
        assert_eq!(Input::from_symbol("Return"), Some(Input::Evaluate));
        assert_eq!(Input::from_symbol("BackSpace"), Some(Input::ClearEntry));
        assert_eq!(Input::from_symbol("Escape"), Some(Input::Clear));
        assert_eq!(Input::from_symbol("√x"), Some(Input::Sqrt));
        assert_eq!(Input::from_symbol("x²"), Some(Input::Square));
    }

    #[test]
    fn test_unknown_symbols() {
        assert_eq!(Input::from_symbol(""), None);
        assert_eq!(Input::from_symbol("a"), None);
        assert_eq!(Input::from_symbol("12"), None);
        assert_eq!(Input::from_symbol("Tab"), None);
    }

    #[test]
    fn test_keypad_labels_dispatch_to_their_input() {
        for b in KEYPAD.iter() {
            assert_eq!(Input::from_symbol(b.label), Some(b.input), "{}", b.label);
        }
    }

    #[test]
    fn test_keypad_fills_grid() {
        for row in 0..KEYPAD_ROWS {
            let width: usize = keypad_row(row).map(|b| b.span).sum();
            assert_eq!(width, KEYPAD_COLS, "row {row}");

            let mut col = 0;
            for b in keypad_row(row) {
                assert_eq!(b.col, col);
                col += b.span;
            }
        }
    }
}
