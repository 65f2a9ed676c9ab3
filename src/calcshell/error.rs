//! Error taxonomy for calculator operations and command dispatch.
//!
//! Every failure in the engine is a value, never a panic. Arithmetic and state
//! operations return [`CalcResult`]; the dispatcher catches the error at the
//! command boundary and the session renders it without stopping.

use std::error::Error;
use std::fmt;

/// Error types for calculator and dispatcher operations
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Division with a zero divisor (including `-0`).
    DivisionByZero,
    /// Square root of a negative number.
    NegativeRoot(f64),
    /// Factorial of a negative number.
    NegativeFactorial(f64),
    /// Factorial of a value that is not a whole number.
    NonIntegerFactorial(f64),
    /// Inverse trigonometric argument outside `[-1, 1]`.
    DomainError { function: String, value: f64 },
    /// Logarithm of zero or a negative number.
    NonPositiveLogarithm(f64),
    /// Logarithm base that is non-positive or equal to one.
    InvalidLogBase(f64),
    /// Angle mode other than `degrees` or `radians`.
    InvalidAngleMode(String),
    /// Precision outside `0..=15`, or not an integer at all.
    InvalidPrecision(String),
    /// First token of a line does not name a registered command.
    UnknownCommand(String),
    /// Wrong number of arguments; carries the expected usage string.
    UsageError(String),
    /// Non-numeric argument while strict number parsing is enabled.
    ParseError(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "Division by zero is not allowed"),
            CalcError::NegativeRoot(value) => write!(
                f,
                "Cannot calculate square root of negative number: {}",
                value
            ),
            CalcError::NegativeFactorial(value) => write!(
                f,
                "Factorial is not defined for negative numbers: {}",
                value
            ),
            CalcError::NonIntegerFactorial(value) => {
                write!(f, "Factorial is only defined for integers: {}", value)
            }
            CalcError::DomainError { function, value } => write!(
                f,
                "{} argument must be between -1 and 1, got {}",
                function, value
            ),
            CalcError::NonPositiveLogarithm(value) => write!(
                f,
                "Logarithm is not defined for non-positive numbers: {}",
                value
            ),
            CalcError::InvalidLogBase(base) => write!(
                f,
                "Logarithm base must be positive and not equal to 1, got {}",
                base
            ),
            CalcError::InvalidAngleMode(mode) => write!(
                f,
                "Angle mode must be 'degrees' or 'radians', got '{}'",
                mode
            ),
            CalcError::InvalidPrecision(precision) => write!(
                f,
                "Precision must be between 0 and 15, got '{}'",
                precision
            ),
            CalcError::UnknownCommand(name) => write!(
                f,
                "Unknown command: {}. Type 'help' for available commands.",
                name
            ),
            CalcError::UsageError(usage) => write!(f, "Usage: {}", usage),
            CalcError::ParseError(token) => write!(f, "Not a number: '{}'", token),
        }
    }
}

impl Error for CalcError {}

/// Result type for calculator operations
///
/// Either returns a computed `f64` value or a `CalcError`.
pub type CalcResult = Result<f64, CalcError>;
