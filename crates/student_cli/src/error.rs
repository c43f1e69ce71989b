//! Shell error types.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Operator input that could not be interpreted; recovered by re-prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidNumber { field: &'static str, value: String },
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { field, value } => {
                write!(f, "Invalid {field}: '{value}' is not a whole number.")
            }
        }
    }
}

impl Error for InputError {}

/// Session-ending shell failure.
#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ShellError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

pub type ShellResult<T> = Result<T, ShellError>;
