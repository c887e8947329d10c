//! Data models for the address book.
//!
//! A [`Record`] is one contact with its phones; the [`AddressBook`] owns every
//! record, keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
