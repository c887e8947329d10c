//! Record model: one named contact and its phone numbers.

use crate::domain::{ContactName, PhoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// contain duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Append a phone to the end of the list.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Find the first phone whose value equals `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Remove the first phone equal to `value`.
    ///
    /// Returns `true` if a phone was removed. Later duplicates are kept.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == value) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// `new` is not validated here; callers must check it with
    /// [`PhoneNumber::validate`] first.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> bool {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(phone) => {
                phone.set_unchecked(new);
                true
            }
            None => false,
        }
    }

    /// Phones joined with `", "`, empty when there are none.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(s: &str) -> PhoneNumber {
        PhoneNumber::new(s).unwrap()
    }

    fn alex() -> Record {
        Record::new(ContactName::new("Alex"))
    }

    #[test]
    fn test_add_phone_preserves_order_and_duplicates() {
        let mut r = alex();
        r.add_phone(phone("0931234567"));
        r.add_phone(phone("0509876543"));
        r.add_phone(phone("0931234567"));

        let values: Vec<&str> = r.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["0931234567", "0509876543", "0931234567"]);
    }

    #[test]
    fn test_remove_phone_only_first_match() {
        let mut r = alex();
        r.add_phone(phone("0931234567"));
        r.add_phone(phone("0509876543"));
        r.add_phone(phone("0931234567"));

        assert!(r.remove_phone("0931234567"));
        assert_eq!(r.phones().len(), 2);
        assert_eq!(r.phones()[0].as_str(), "0509876543");
        assert_eq!(r.phones()[1].as_str(), "0931234567");
    }

    #[test]
    fn test_remove_phone_missing() {
        let mut r = alex();
        r.add_phone(phone("0931234567"));
        assert!(!r.remove_phone("1111111111"));
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone() {
        let mut r = alex();
        r.add_phone(phone("0931234567"));
        assert!(r.edit_phone("0931234567", "0509876543"));
        assert_eq!(r.phones()[0].as_str(), "0509876543");
    }

    #[test]
    fn test_edit_phone_missing_leaves_phones() {
        let mut r = alex();
        r.add_phone(phone("0931234567"));
        assert!(!r.edit_phone("1111111111", "0509876543"));
        assert_eq!(r.phones()[0].as_str(), "0931234567");
    }

    #[test]
    fn test_edit_phone_first_duplicate_only() {
        let mut r = alex();
        r.add_phone(phone("0931234567"));
        r.add_phone(phone("0931234567"));
        assert!(r.edit_phone("0931234567", "0509876543"));
        assert_eq!(r.phones()[0].as_str(), "0509876543");
        assert_eq!(r.phones()[1].as_str(), "0931234567");
    }

    #[test]
    fn test_find_phone() {
        let mut r = alex();
        r.add_phone(phone("0931234567"));
        assert!(r.find_phone("0931234567").is_some());
        assert!(r.find_phone("0509876543").is_none());
    }

    #[test]
    fn test_display() {
        let mut r = alex();
        assert_eq!(r.to_string(), "Alex: ");
        r.add_phone(phone("0931234567"));
        r.add_phone(phone("0509876543"));
        assert_eq!(r.to_string(), "Alex: 0931234567, 0509876543");
    }
}
