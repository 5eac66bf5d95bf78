//! Data models for the address book.
//!
//! This module contains the contact entity and the ordered contact list the
//! presentation layer binds to.

pub mod contact;
pub mod contact_list;

pub use contact::Contact;
pub use contact_list::ContactList;
