//! Contact model representing a person in the address book.

use crate::domain::{EmailAddress, ImageRef, ValidationError};
use crate::error::ModelResult;
use crate::observable::{ListChange, ObservableList, SubscriptionId};
use std::fmt;
use tracing::debug;

/// A person record: first name, last name, optional portrait and an ordered
/// list of email addresses.
///
/// Names are free-form at this layer (they may be empty); non-emptiness is
/// enforced by the add/edit dialogs. Emails only enter through
/// [`Contact::add_email`] / [`Contact::try_add_email`], and their element type
/// [`EmailAddress`] cannot be built without passing validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    first_name: String,
    last_name: String,
    image: Option<ImageRef>,
    emails: ObservableList<EmailAddress>,
}

impl Contact {
    /// Create a contact with no emails and no image.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self::with_details(first_name, last_name, None, None)
    }

    /// Create a contact with an optional initial email and image.
    ///
    /// An invalid initial email is dropped without error; the contact is still
    /// created, with an empty email list. Use [`Contact::try_add_email`] after
    /// construction when the caller needs to know.
    ///
    /// # Example
    ///
    /// ```
    /// use contact_app::Contact;
    ///
    /// let kept = Contact::with_details("Ada", "Lovelace", Some("ada@math.uk"), None);
    /// assert_eq!(kept.email_count(), 1);
    ///
    /// let dropped = Contact::with_details("Ada", "Lovelace", Some("not an email"), None);
    /// assert_eq!(dropped.email_count(), 0);
    /// ```
    pub fn with_details(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: Option<&str>,
        image: Option<ImageRef>,
    ) -> Self {
        let mut contact = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            image,
            emails: ObservableList::new(),
        };

        if let Some(email) = email {
            if !contact.add_email(email) {
                debug!(contact = %contact, "Dropped invalid initial email");
            }
        }

        contact
    }

    /// Copy names, email addresses and image from `other`.
    ///
    /// The email list is copied, not shared: later changes to either contact
    /// do not affect the other. Listeners registered on this contact's email
    /// list stay registered and receive a single `Reset` event.
    pub fn set_all(&mut self, other: &Contact) {
        self.first_name = other.first_name.clone();
        self.last_name = other.last_name.clone();
        self.image = other.image.clone();
        self.emails.replace_all(other.emails.as_slice().to_vec());
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_image(&mut self, image: Option<ImageRef>) {
        self.image = image;
    }

    /// Append `email` if it is valid.
    ///
    /// Returns `true` when the address was appended, `false` when it was
    /// rejected. Never panics.
    pub fn add_email(&mut self, email: &str) -> bool {
        self.try_add_email(email).is_ok()
    }

    /// Append `email` if it is valid, reporting why it was rejected otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` and leaves the list unchanged
    /// when `email` fails validation.
    pub fn try_add_email(&mut self, email: &str) -> Result<(), ValidationError> {
        let email = EmailAddress::new(email)?;
        self.emails.push(email);
        Ok(())
    }

    /// Remove and return the email at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::OutOfRange` when `index >= email_count()`; the
    /// list is not modified.
    pub fn remove_email(&mut self, index: usize) -> ModelResult<EmailAddress> {
        self.emails.remove(index)
    }

    /// Get the email at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::OutOfRange` when `index >= email_count()`.
    pub fn email(&self, index: usize) -> ModelResult<&EmailAddress> {
        self.emails.get(index)
    }

    /// The live email list. Read-only: mutate through `add_email`/`remove_email`.
    pub fn emails(&self) -> &ObservableList<EmailAddress> {
        &self.emails
    }

    /// Register a listener for changes to this contact's email list.
    pub fn subscribe_emails(
        &mut self,
        listener: impl FnMut(&ListChange<EmailAddress>) + 'static,
    ) -> SubscriptionId {
        self.emails.subscribe(listener)
    }

    pub fn unsubscribe_emails(&mut self, id: SubscriptionId) -> bool {
        self.emails.unsubscribe(id)
    }

    pub fn email_count(&self) -> usize {
        self.emails.len()
    }

    /// All email addresses joined with `separator`.
    pub fn joined_emails(&self, separator: &str) -> String {
        self.emails
            .iter()
            .map(EmailAddress::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_contact_new() {
        let contact = Contact::new("Ada", "Lovelace");
        assert_eq!(contact.first_name(), "Ada");
        assert_eq!(contact.last_name(), "Lovelace");
        assert!(contact.image().is_none());
        assert_eq!(contact.email_count(), 0);
    }

    #[test]
    fn test_contact_display() {
        assert_eq!(Contact::new("Ada", "Lovelace").to_string(), "Ada Lovelace");
        assert_eq!(Contact::new("", "").to_string(), " ");
    }

    #[test]
    fn test_with_details_keeps_valid_initial_email() {
        let image = ImageRef::new("ada.png").unwrap();
        let contact = Contact::with_details("Ada", "Lovelace", Some("ada@math.uk"), Some(image.clone()));
        assert_eq!(contact.email(0).unwrap(), "ada@math.uk");
        assert_eq!(contact.image(), Some(&image));
    }

    #[test]
    fn test_with_details_drops_invalid_initial_email() {
        let contact = Contact::with_details("Ada", "Lovelace", Some("ada-l@math.uk"), None);
        assert_eq!(contact.email_count(), 0);
    }

    #[test]
    fn test_email_admission() {
        let mut contact = Contact::new("A", "B");
        assert!(contact.add_email("x@y.z"));
        assert!(!contact.add_email("nope"));
        assert_eq!(contact.emails().len(), 1);
        assert_eq!(contact.email(0).unwrap(), "x@y.z");
    }

    #[test]
    fn test_try_add_email_reports_rejection() {
        let mut contact = Contact::new("A", "B");
        assert_eq!(
            contact.try_add_email("a@b"),
            Err(ValidationError::InvalidEmail("a@b".to_string()))
        );
        assert_eq!(contact.email_count(), 0);
    }

    #[test]
    fn test_duplicate_emails_allowed() {
        let mut contact = Contact::new("A", "B");
        assert!(contact.add_email("x@y.z"));
        assert!(contact.add_email("x@y.z"));
        assert_eq!(contact.joined_emails(", "), "x@y.z, x@y.z");
    }

    #[test]
    fn test_remove_email_shifts() {
        let mut contact = Contact::new("A", "B");
        contact.add_email("a@b.c");
        contact.add_email("d@e.f");
        contact.add_email("g@h.i");

        assert_eq!(contact.remove_email(1).unwrap(), "d@e.f");
        assert_eq!(contact.joined_emails(","), "a@b.c,g@h.i");
    }

    #[test]
    fn test_email_index_out_of_range() {
        let mut contact = Contact::new("A", "B");
        contact.add_email("a@b.c");

        assert_eq!(
            contact.remove_email(1),
            Err(ModelError::OutOfRange { index: 1, len: 1 })
        );
        assert!(contact.email(usize::MAX).is_err());
        assert_eq!(contact.email_count(), 1);
    }

    #[test]
    fn test_set_all_copies_fields() {
        let mut target = Contact::new("fn", "ln");
        let source = Contact::with_details(
            "fn2",
            "ln2",
            Some("e@x.y"),
            Some(ImageRef::new("img.png").unwrap()),
        );

        target.set_all(&source);
        assert_eq!(target, source);
    }

    #[test]
    fn test_set_all_does_not_alias_emails() {
        let mut target = Contact::new("fn", "ln");
        let mut source = Contact::with_details("fn2", "ln2", Some("e@x.y"), None);

        target.set_all(&source);
        source.add_email("f@x.y");
        target.remove_email(0).unwrap();

        assert_eq!(source.email_count(), 2);
        assert_eq!(target.email_count(), 0);
    }

    #[test]
    fn test_set_all_keeps_listeners_and_emits_reset() {
        let mut target = Contact::new("fn", "ln");
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        target.subscribe_emails(move |change| sink.borrow_mut().push(change.clone()));

        let source = Contact::with_details("a", "b", Some("e@x.y"), None);
        target.set_all(&source);
        target.add_email("f@x.y");

        assert_eq!(events.borrow().len(), 2);
        assert_eq!(events.borrow()[0], ListChange::Reset { len: 1 });
    }

    #[test]
    fn test_setters() {
        let mut contact = Contact::new("A", "B");
        contact.set_first_name("C");
        contact.set_last_name("D");
        contact.set_image(Some(ImageRef::new("c.png").unwrap()));
        assert_eq!(contact.to_string(), "C D");
        assert!(contact.image().is_some());

        contact.set_image(None);
        assert!(contact.image().is_none());
    }
}
