//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format accepted for birthdays, e.g. `15.06.1990`.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// This ensures that birthdays are validated at construction time: the
/// string must parse as a real calendar date in `DD.MM.YYYY` form. Both
/// the original string (for display and round-tripping) and the parsed
/// date (for the upcoming-birthday computation) are retained.
///
/// # Example
///
/// ```
/// use rolo::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.as_str(), "15.06.1990");
/// assert_eq!(birthday.date().format("%d.%m.%Y").to_string(), "15.06.1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string is not a
    /// real calendar date in `DD.MM.YYYY` form.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let value = birthday.into();
        let date = NaiveDate::parse_from_str(&value, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(value.clone()))?;

        Ok(Self { value, date })
    }

    /// Get the birthday as the originally provided string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

// Serde support - serialize as the original string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
