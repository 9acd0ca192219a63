//! Record model representing a single contact in the book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A single contact: a validated name, an ordered list of phone numbers,
/// and an optional birthday.
///
/// The name is fixed at construction. Phones and the birthday are added
/// through mutation; duplicates are permitted in the phone list and
/// insertion order is preserved for display.
///
/// Two validation policies coexist here. `Record::new` propagates an
/// invalid name to the caller. `add_phone` and `add_birthday` swallow the
/// validation failure, report it through the logging layer, and leave the
/// record unchanged, so one bad value does not abort a batch of
/// operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with the given name and no phones or birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Invalid input is reported and discarded; the phone list is left
    /// unchanged in that case.
    pub fn add_phone(&mut self, phone: &str) {
        match Phone::new(phone) {
            Ok(phone) => self.phones.push(phone),
            Err(e) => warn!("Discarding phone for {}: {}", self.name, e),
        }
    }

    /// Remove the first phone equal to the given digit string.
    ///
    /// Returns whether a removal occurred. Equality is exact string match
    /// on the stored digits.
    pub fn delete_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace one phone number: delete `old`, then add `new`.
    ///
    /// Returns whether the delete succeeded. The add goes through
    /// `add_phone`'s non-fatal validation, so an invalid `new` leaves the
    /// record with `old` removed and nothing added.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> bool {
        if self.delete_phone(old) {
            self.add_phone(new);
            true
        } else {
            false
        }
    }

    /// Validate and set the birthday.
    ///
    /// Invalid input is reported and discarded; a previously set birthday
    /// is left unchanged in that case.
    pub fn add_birthday(&mut self, birthday: &str) {
        match Birthday::new(birthday) {
            Ok(birthday) => self.birthday = Some(birthday),
            Err(e) => warn!("Discarding birthday for {}: {}", self.name, e),
        }
    }

    /// Replace the entire phone list with a single, already validated
    /// phone. Used by the book-level `change` operation.
    pub fn replace_phones(&mut self, phone: Phone) {
        self.phones = vec![phone];
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
