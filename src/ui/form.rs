//! Add/edit dialog state and submit validation.

use crate::domain::ImageRef;
use crate::models::Contact;
use thiserror::Error;
use tracing::debug;

use super::layout::{ADD_BUTTON, EDIT_BUTTON};

/// Which modal dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Add,
    Edit,
}

impl DialogKind {
    /// Dialog window title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Add => ADD_BUTTON,
            Self::Edit => EDIT_BUTTON,
        }
    }

    /// Label of the submit button.
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Add => ADD_BUTTON,
            Self::Edit => "Save",
        }
    }
}

/// Why a dialog submission was refused. Shown to the user as one alert.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// First or last name left empty.
    #[error("Please fill out all fields.")]
    InvalidInput,

    /// At least one email field failed validation.
    #[error("Please enter valid email addresses.")]
    InvalidEmail,
}

impl FormError {
    /// Alert title for this error.
    pub fn title(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid Input",
            Self::InvalidEmail => "Invalid Email",
        }
    }
}

/// Everything an add/edit dialog collects before submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    /// One entry per email text field, in display order. Fields may be empty
    /// or invalid until submission.
    pub email_fields: Vec<String>,
    pub image: Option<ImageRef>,
}

impl ContactForm {
    /// An empty form, as shown by the Add dialog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-populated from `contact`, as shown by the Edit dialog.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            first_name: contact.first_name().to_string(),
            last_name: contact.last_name().to_string(),
            email_fields: contact
                .emails()
                .iter()
                .map(|email| email.as_str().to_string())
                .collect(),
            image: contact.image().cloned(),
        }
    }

    /// Add an email field holding `value`.
    pub fn add_email_field(&mut self, value: impl Into<String>) {
        self.email_fields.push(value.into());
    }

    /// Remove the last email field. Does nothing when there are none.
    pub fn remove_last_email_field(&mut self) -> Option<String> {
        self.email_fields.pop()
    }

    pub fn choose_image(&mut self, image: ImageRef) {
        self.image = Some(image);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Build a new contact from the form.
    ///
    /// Name emptiness is checked first. Otherwise every email field is offered
    /// to [`Contact::add_email`] and the results are folded into one flag, so
    /// a single [`FormError::InvalidEmail`] covers any number of bad fields.
    pub fn submit(&self) -> Result<Contact, FormError> {
        if self.first_name.is_empty() || self.last_name.is_empty() {
            return Err(FormError::InvalidInput);
        }

        let mut contact = Contact::new(self.first_name.as_str(), self.last_name.as_str());
        let mut valid_emails = true;
        for field in &self.email_fields {
            if !contact.add_email(field) {
                debug!(field = %field, "Rejected email field");
                valid_emails = false;
            }
        }
        contact.set_image(self.image.clone());

        if !valid_emails {
            return Err(FormError::InvalidEmail);
        }

        Ok(contact)
    }
}
