//! List panel mirroring a [`ContactList`] through its change events.

use crate::models::{Contact, ContactList};
use crate::observable::{ListChange, SubscriptionId};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Rows {
    labels: Vec<String>,
    stale: bool,
}

impl Rows {
    fn apply(&mut self, change: &ListChange<Contact>) {
        match change {
            ListChange::Inserted { index, item } => self.labels.insert(*index, item.to_string()),
            ListChange::Removed { index, .. } => {
                self.labels.remove(*index);
            }
            ListChange::Replaced { index, new, .. } => self.labels[*index] = new.to_string(),
            // Content is not carried by the event; wait for `resync`.
            ListChange::Reset { .. } => self.stale = true,
        }
    }
}

/// Row labels of the contact list, kept current by a subscription.
///
/// The view never reads the list after binding, except through
/// [`ListView::resync`] when an event could not be applied incrementally.
#[derive(Debug)]
pub struct ListView {
    rows: Rc<RefCell<Rows>>,
    subscription: SubscriptionId,
}

impl ListView {
    /// Seed the rows from `list` and subscribe to its changes.
    pub fn bind(list: &mut ContactList) -> Self {
        let rows = Rc::new(RefCell::new(Rows {
            labels: list.iter().map(ToString::to_string).collect(),
            stale: false,
        }));

        let sink = Rc::clone(&rows);
        let subscription = list.subscribe(move |change| sink.borrow_mut().apply(change));

        Self { rows, subscription }
    }

    /// Stop mirroring `list`.
    pub fn unbind(self, list: &mut ContactList) -> bool {
        list.unsubscribe(self.subscription)
    }

    /// Current row labels, in list order.
    pub fn rows(&self) -> Vec<String> {
        self.rows.borrow().labels.clone()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().labels.is_empty()
    }

    /// Whether a reset arrived that has not been followed by [`ListView::resync`].
    pub fn is_stale(&self) -> bool {
        self.rows.borrow().stale
    }

    /// Rebuild every row from `list`.
    pub fn resync(&self, list: &ContactList) {
        let mut rows = self.rows.borrow_mut();
        rows.labels = list.iter().map(ToString::to_string).collect();
        rows.stale = false;
    }
}
