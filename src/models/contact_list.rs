//! Ordered, index-addressed collection of contacts.

use super::contact::Contact;
use crate::error::ModelResult;
use crate::observable::{ListChange, ObservableList, SubscriptionId};
use tracing::debug;

/// The address book: contacts in insertion order, addressed by dense indices
/// in `[0, len)`.
///
/// Every mutation is reported to subscribers (see [`ContactList::subscribe`])
/// so a list view can mirror it. No sorting is ever applied, and duplicates
/// are permitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactList {
    list: ObservableList<Contact>,
}

impl ContactList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new contact with the given names, no emails and no image.
    pub fn add_new(&mut self, first_name: impl Into<String>, last_name: impl Into<String>) {
        self.add_contact(Contact::new(first_name, last_name));
    }

    /// Append `contact`.
    pub fn add_contact(&mut self, contact: Contact) {
        debug!(contact = %contact, index = self.list.len(), "Adding contact");
        self.list.push(contact);
    }

    /// Remove and return the contact at `index`. Later contacts move down by one.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::OutOfRange` when `index >= len()`; nothing changes.
    pub fn del_contact(&mut self, index: usize) -> ModelResult<Contact> {
        let removed = self.list.remove(index)?;
        debug!(contact = %removed, index, "Deleted contact");
        Ok(removed)
    }

    /// Get the contact at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::OutOfRange` when `index >= len()`.
    pub fn contact(&self, index: usize) -> ModelResult<&Contact> {
        self.list.get(index)
    }

    /// Replace the contact at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::OutOfRange` when `index >= len()`; nothing changes.
    pub fn set_contact_at(&mut self, index: usize, contact: Contact) -> ModelResult<Contact> {
        let previous = self.list.set(index, contact)?;
        debug!(previous = %previous, index, "Replaced contact");
        Ok(previous)
    }

    /// The live contact sequence.
    pub fn list(&self) -> &ObservableList<Contact> {
        &self.list
    }

    /// Register a listener for changes to the list.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&ListChange<Contact>) + 'static,
    ) -> SubscriptionId {
        self.list.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.list.unsubscribe(id)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.list.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;

    fn abc() -> ContactList {
        let mut list = ContactList::new();
        list.add_new("A", "a");
        list.add_new("B", "b");
        list.add_new("C", "c");
        list
    }

    #[test]
    fn test_empty_list() {
        let list = ContactList::new();
        assert_eq!(list.list().len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_then_fetch() {
        let mut list = ContactList::new();
        list.add_new("Ada", "Lovelace");
        assert_eq!(list.contact(0).unwrap().to_string(), "Ada Lovelace");
        assert_eq!(list.contact(0).unwrap().email_count(), 0);
        assert!(list.contact(0).unwrap().image().is_none());
    }

    #[test]
    fn test_remove_shifts_down() {
        let mut list = abc();
        let removed = list.del_contact(1).unwrap();

        assert_eq!(removed.first_name(), "B");
        assert_eq!(list.contact(0).unwrap().first_name(), "A");
        assert_eq!(list.contact(1).unwrap().first_name(), "C");
        assert_eq!(list.list().len(), 2);
    }

    #[test]
    fn test_replace_at_index() {
        let mut list = abc();
        let previous = list.set_contact_at(0, Contact::new("Z", "Z")).unwrap();

        assert_eq!(previous.first_name(), "A");
        assert_eq!(list.contact(0).unwrap().first_name(), "Z");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_out_of_range_leaves_list_unchanged() {
        let mut list = abc();
        let before = list.clone();
        let len = list.len();

        assert_eq!(
            list.del_contact(len),
            Err(ModelError::OutOfRange { index: 3, len: 3 })
        );
        assert!(list.del_contact(usize::MAX).is_err());
        assert!(list.set_contact_at(len, Contact::new("X", "X")).is_err());
        assert!(list.contact(len).is_err());

        assert_eq!(list, before);
    }

    #[test]
    fn test_duplicates_permitted() {
        let mut list = ContactList::new();
        let contact = Contact::with_details("Ada", "Lovelace", Some("ada@math.uk"), None);
        list.add_contact(contact.clone());
        list.add_contact(contact);

        assert_eq!(list.len(), 2);
        assert_eq!(list.contact(0).unwrap(), list.contact(1).unwrap());
    }

    #[test]
    fn test_iter_in_insertion_order() {
        let names: Vec<String> = abc().iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["A a", "B b", "C c"]);
    }
}
