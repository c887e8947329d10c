//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits every stored phone number has.
pub const PHONE_DIGITS: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// `new` validates the value. Values restored from storage and values written
/// by `Record::edit_phone` are trusted as-is.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0931234567").unwrap();
/// assert_eq!(phone.as_str(), "0931234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must contain only ASCII digits (checked first, so `""` fails here)
    /// - Must be exactly [`PHONE_DIGITS`] long
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonDigit` or `ValidationError::WrongLength`.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        Self::validate(&phone)?;
        Ok(Self(phone))
    }

    /// Check a candidate value without building a `PhoneNumber`.
    pub fn validate(phone: &str) -> Result<(), ValidationError> {
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NonDigit);
        }
        if phone.len() != PHONE_DIGITS {
            return Err(ValidationError::WrongLength);
        }
        Ok(())
    }

    /// Overwrite the stored value. Callers are trusted to have validated it.
    pub(crate) fn set_unchecked(&mut self, phone: impl Into<String>) {
        self.0 = phone.into();
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - stored values are trusted like `set_unchecked`, so a
// record edited through `Record::edit_phone` loads back exactly as saved
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
