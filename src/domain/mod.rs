//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the address book's domain
//! concepts: email addresses and portrait image handles. These value objects
//! validate at construction time, so an invalid email can never be stored in
//! a contact.

pub mod email;
pub mod errors;
pub mod image;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use image::ImageRef;
