//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday string is invalid.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number format: {}", phone),
            Self::InvalidBirthday(birthday) => {
                write!(f, "Invalid birthday format: {}", birthday)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
