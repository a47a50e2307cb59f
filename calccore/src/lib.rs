//! calccore — expression state machine and evaluator for the calculator

pub mod config;
pub mod display;
pub mod error;
pub mod expr;
pub mod greeting;
pub mod input;
pub mod machine;
pub mod theme;

pub use error::CalcError;
pub use input::{Input, Operator};
pub use machine::{Calculator, State, ERROR_MESSAGE};
pub use theme::CalcTheme;
