//! ContactApp - a personal address book.
//!
//! The crate is split between a small domain core and a presentation layer
//! that drives it.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`EmailAddress`, `ImageRef`) and the email validity predicate
//! - **observable**: `ObservableList`, a vector that reports every mutation to listeners
//! - **models**: `Contact` and `ContactList`
//! - **ui**: Controller, dialog boundary, list/detail views and the terminal front-end
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **logging**: `tracing` subscriber bootstrap

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod models;
pub mod observable;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use domain::{EmailAddress, ImageRef, ValidationError};
pub use error::{AppError, ConfigError, ModelError};
pub use models::{Contact, ContactList};
pub use observable::{ListChange, ObservableList, SubscriptionId};
pub use ui::{MainController, TerminalApp};
