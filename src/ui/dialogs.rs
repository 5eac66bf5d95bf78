//! Toolkit boundary for modal dialogs.

use super::form::{ContactForm, DialogKind};
use crate::models::Contact;
use tracing::{debug, warn};

/// Severity of an alert box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Error,
}

/// The modal surfaces a front-end must provide.
///
/// Implementations block until the user answers, in the way a modal dialog
/// blocks its owner window.
pub trait Dialogs {
    /// Let the user edit `form` in a dialog of the given kind.
    ///
    /// Returns the form as submitted, or `None` if the dialog was cancelled.
    fn edit_form(&mut self, kind: DialogKind, form: ContactForm) -> Option<ContactForm>;

    /// Ask for confirmation. Returns `true` only for an explicit OK.
    fn confirm(&mut self, title: &str, header: &str) -> bool;

    /// Show a message the user must acknowledge.
    fn alert(&mut self, kind: AlertKind, title: &str, content: &str);
}

/// Run an add/edit dialog until it yields a valid contact or is cancelled.
///
/// A refused submission shows one error alert and re-opens the dialog with
/// the user's input intact.
pub fn run_contact_dialog(
    dialogs: &mut dyn Dialogs,
    kind: DialogKind,
    mut form: ContactForm,
) -> Option<Contact> {
    loop {
        let Some(submitted) = dialogs.edit_form(kind, form) else {
            debug!(dialog = kind.title(), "Dialog cancelled");
            return None;
        };

        match submitted.submit() {
            Ok(contact) => return Some(contact),
            Err(err) => {
                warn!(dialog = kind.title(), error = %err, "Dialog submission refused");
                dialogs.alert(AlertKind::Error, err.title(), &err.to_string());
                form = submitted;
            }
        }
    }
}
