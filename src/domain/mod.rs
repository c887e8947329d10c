//! Domain value objects and types.
//!
//! Type-safe wrappers for the two field kinds an address book stores:
//! contact names and phone numbers. Phone numbers are validated at
//! construction time so an invalid one is never represented.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::{PhoneNumber, PHONE_DIGITS};
