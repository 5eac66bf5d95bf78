//! Main window controller: owns the contact list and drives the
//! add, edit, delete and selection flows.

use super::details::DetailView;
use super::dialogs::{run_contact_dialog, AlertKind, Dialogs};
use super::form::{ContactForm, DialogKind};
use super::list_view::ListView;
use crate::error::ModelResult;
use crate::models::{Contact, ContactList};
use tracing::info;

const NO_SELECTION: &str = "No Selection";
const DELETE_TITLE: &str = "Delete Contact";
const DELETE_HEADER: &str = "Are you sure you want to delete this contact?";

/// What an intent did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A contact was appended at this index.
    Added(usize),
    /// The contact at this index was replaced.
    Edited(usize),
    /// The contact at this index was removed.
    Deleted(usize),
    /// The user cancelled or declined; nothing changed.
    Cancelled,
    /// The intent needs a selection and there was none; a warning was shown.
    NoSelection,
}

/// State behind the primary window.
///
/// Index errors from the model are propagated unchanged: the controller only
/// passes indices taken from its own selection, so an `OutOfRange` here means
/// the selection and the list disagree.
#[derive(Debug)]
pub struct MainController {
    contacts: ContactList,
    list_view: ListView,
    details: DetailView,
    selection: Option<usize>,
}

impl MainController {
    pub fn new() -> Self {
        Self::with_contacts(ContactList::new())
    }

    /// Start from an existing list.
    pub fn with_contacts(mut contacts: ContactList) -> Self {
        let list_view = ListView::bind(&mut contacts);
        Self {
            contacts,
            list_view,
            details: DetailView::new(),
            selection: None,
        }
    }

    pub fn contacts(&self) -> &ContactList {
        &self.contacts
    }

    pub fn list_view(&self) -> &ListView {
        &self.list_view
    }

    pub fn details(&self) -> &DetailView {
        &self.details
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selection.and_then(|index| self.contacts.contact(index).ok())
    }

    /// Move the selection cursor and refresh the detail panel.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::OutOfRange` if `index` is not in the list; the
    /// previous selection is kept.
    pub fn select(&mut self, index: Option<usize>) -> ModelResult<()> {
        match index {
            Some(index) => {
                let contact = self.contacts.contact(index)?;
                self.details.show(Some(contact));
                self.selection = Some(index);
            }
            None => {
                self.details.show(None);
                self.selection = None;
            }
        }
        Ok(())
    }

    /// "Add Contact": run the Add dialog and append the result.
    pub fn add_contact(&mut self, dialogs: &mut dyn Dialogs) -> ModelResult<Outcome> {
        let Some(contact) = run_contact_dialog(dialogs, DialogKind::Add, ContactForm::new()) else {
            return Ok(Outcome::Cancelled);
        };

        info!(contact = %contact, "Adding contact");
        self.details.show(Some(&contact));
        self.contacts.add_contact(contact);
        Ok(Outcome::Added(self.contacts.len() - 1))
    }

    /// "Edit Contact": edit the selected contact through a fresh copy and
    /// replace it in the list. The original contact is never mutated.
    pub fn edit_selected(&mut self, dialogs: &mut dyn Dialogs) -> ModelResult<Outcome> {
        let Some(index) = self.selection else {
            dialogs.alert(AlertKind::Warning, NO_SELECTION, "Please select a contact to edit.");
            return Ok(Outcome::NoSelection);
        };

        let form = ContactForm::from_contact(self.contacts.contact(index)?);
        let Some(edited) = run_contact_dialog(dialogs, DialogKind::Edit, form) else {
            return Ok(Outcome::Cancelled);
        };

        info!(index, contact = %edited, "Replacing contact");
        self.contacts.set_contact_at(index, edited)?;
        self.details.show(Some(self.contacts.contact(index)?));
        Ok(Outcome::Edited(index))
    }

    /// "Delete Contact": confirm, then remove the selected contact.
    pub fn delete_selected(&mut self, dialogs: &mut dyn Dialogs) -> ModelResult<Outcome> {
        let Some(index) = self.selection else {
            dialogs.alert(AlertKind::Warning, NO_SELECTION, "Please select a contact to delete.");
            return Ok(Outcome::NoSelection);
        };

        if !dialogs.confirm(DELETE_TITLE, DELETE_HEADER) {
            return Ok(Outcome::Cancelled);
        }

        let removed = self.contacts.del_contact(index)?;
        info!(index, contact = %removed, "Deleted contact");
        self.selection = None;
        self.details.clear();
        Ok(Outcome::Deleted(index))
    }
}

impl Default for MainController {
    fn default() -> Self {
        Self::new()
    }
}
