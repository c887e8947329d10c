//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number contains something other than decimal digits.
    NonDigit,

    /// The phone number is made of digits but is not exactly 10 long.
    WrongLength,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonDigit => write!(f, "Phone number must contain only digits."),
            Self::WrongLength => write!(f, "Phone number must contain exactly 10 digits."),
        }
    }
}

impl std::error::Error for ValidationError {}
