//! Presentation boundary.
//!
//! Everything here sits on top of the model: the controller turns add, edit,
//! delete and selection intents into [`ContactList`](crate::ContactList)
//! operations, and talks to the toolkit only through the [`Dialogs`] trait.
//! [`TerminalApp`] is the bundled front-end.

pub mod controller;
pub mod details;
pub mod dialogs;
pub mod form;
pub mod layout;
pub mod list_view;
pub mod terminal;

pub use controller::{MainController, Outcome};
pub use details::DetailView;
pub use dialogs::{run_contact_dialog, AlertKind, Dialogs};
pub use form::{ContactForm, DialogKind, FormError};
pub use list_view::ListView;
pub use terminal::{Terminal, TerminalApp};
