use std::{error::Error, fmt::Display};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperandPosition {
    First,
    Second,
}

impl Display for OperandPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperandPosition::First => write!(f, "first"),
            OperandPosition::Second => write!(f, "second"),
        }
    }
}

/// Errors that end an invocation. Problems with the answer store are
/// never represented here, since they're downgraded to messages.
#[derive(Debug, PartialEq)]
pub enum CalcError {
    IncorrectFormat,
    InvalidOperand(OperandPosition, String),
    InvalidOperation(String),
    DivisionByZero,
}

impl Error for CalcError {}

impl Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::IncorrectFormat => {
                write!(
                    f,
                    "Incorrect format. Type 'calc help' for usage instructions."
                )
            }
            CalcError::InvalidOperand(position, token) => {
                write!(f, "Error: Invalid {} number '{}'.", position, token)
            }
            CalcError::InvalidOperation(token) => {
                write!(
                    f,
                    "Error: Invalid operation '{}'. Supported operators: +, -, x, *, /",
                    token
                )
            }
            CalcError::DivisionByZero => {
                write!(f, "Error: Division by zero is undefined.")
            }
        }
    }
}
