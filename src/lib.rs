//! Contact Book - a command-line address book for names and phone numbers.
//!
//! Contacts are added, changed and looked up through a line-oriented prompt,
//! and the whole book is persisted to disk between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (contact names, phone numbers)
//! - **models**: Contact records and the name-keyed address book
//! - **handlers**: The `add`, `change`, `phone` and `all` commands
//! - **storage**: Loading and saving the address book
//! - **session**: The interactive prompt loop
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod models;
pub mod session;
pub mod storage;

pub use config::Config;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, SessionError, StorageError};
pub use handlers::{handle_add, handle_change, handle_phone, handle_show_all};
pub use models::{AddressBook, Record};
pub use session::{dispatch, parse_input, Command, Outcome, Session};
pub use storage::{load_data, save_data, try_load_data};
