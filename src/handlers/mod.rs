//! Command handlers.
//!
//! Each handler takes the positional arguments of one command and the
//! address book, mutates the book as needed, and returns the message to show
//! the user. Handlers never fail: every refusal is rendered through
//! [`CommandError`]'s `Display`.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::debug;

/// Message shown by `all` when there is nothing to list.
pub const EMPTY_BOOK_MESSAGE: &str = "AddressBook is empty.";

fn respond(result: CommandResult<String>) -> String {
    result.unwrap_or_else(|e| e.to_string())
}

/// `add Name Phone`: file a new contact with one phone.
pub fn handle_add(args: &[&str], book: &mut AddressBook) -> String {
    respond(add(args, book))
}

/// `change Name NewPhone`: replace the contact's first phone.
pub fn handle_change(args: &[&str], book: &mut AddressBook) -> String {
    respond(change(args, book))
}

/// `phone Name`: show the contact's phones.
pub fn handle_phone(args: &[&str], book: &AddressBook) -> String {
    respond(phone(args, book))
}

/// `all`: one line per contact in insertion order.
pub fn handle_show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return EMPTY_BOOK_MESSAGE.to_string();
    }
    book.to_string()
}

fn add(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::Usage("add Name Phone"));
    };

    if book.contains(name) {
        return Err(CommandError::AlreadyExists(name.to_string()));
    }

    let phone = PhoneNumber::new(*phone)?;
    let mut record = Record::new(ContactName::new(*name));
    record.add_phone(phone);
    book.add_record(record);

    debug!(name = %name, "Contact added");
    Ok(format!("Contact '{}' added successfully.", name))
}

fn change(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, new_phone] = args else {
        return Err(CommandError::Usage("change Name NewPhone"));
    };

    let record = book
        .get_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    let old_phone = record
        .phones()
        .first()
        .map(|p| p.as_str().to_string())
        .ok_or(CommandError::NoPhones)?;

    PhoneNumber::validate(new_phone)?;
    record.edit_phone(&old_phone, new_phone);

    debug!(name = %name, "Phone updated");
    Ok(format!("Phone for '{}' updated successfully.", name))
}

fn phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::Usage("phone Name"));
    };

    let record = book
        .get(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))?;

    Ok(format!("{}: {}", name, record.phones_display()))
}
