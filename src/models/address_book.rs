//! The address book: every record, keyed by contact name.

use super::record::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name-keyed collection of records, iterated in insertion order.
///
/// `add_record` overwrites an existing entry with the same name. Keeping one
/// record per name is the job of the `add` command handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record filed under the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        self.records.insert(key, record);
    }

    /// Exact-match lookup.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Remove the record for `name` if there is one.
    ///
    /// Deleting an absent name does nothing. Remaining records keep their order.
    pub fn delete(&mut self, name: &str) {
        self.records.shift_remove(name);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.iter().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}
