//! Observable sequence with synchronous change notification.
//!
//! [`ObservableList<T>`] is a `Vec<T>` that reports every successful mutation
//! to its registered listeners as a single [`ListChange`] event. Presentation
//! code subscribes to mirror the list without polling it.
//!
//! # Invariants
//!
//! 1. Each successful mutation emits exactly one event.
//! 2. Events are delivered to every listener, in subscription order, before
//!    the mutating call returns.
//! 3. A mutation that fails (index out of range) emits nothing and leaves the
//!    list unchanged.
//! 4. Listeners receive `&ListChange<T>` while the list is mutably borrowed,
//!    so they cannot re-enter it.

use crate::error::{ModelError, ModelResult};
use std::fmt;

/// A single mutation of an [`ObservableList`].
#[derive(Debug, Clone, PartialEq)]
pub enum ListChange<T> {
    /// `item` now lives at `index`; later items shifted up by one.
    Inserted { index: usize, item: T },

    /// `item` was taken from `index`; later items shifted down by one.
    Removed { index: usize, item: T },

    /// `old` at `index` was replaced by `new`.
    Replaced { index: usize, old: T, new: T },

    /// The whole content was replaced and now has `len` items.
    Reset { len: usize },
}

/// Handle returned by [`ObservableList::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn FnMut(&ListChange<T>)>;

/// An ordered, index-addressed sequence that notifies listeners on mutation.
pub struct ObservableList<T> {
    items: Vec<T>,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_id: u64,
}

impl<T> ObservableList<T> {
    /// Create an empty list with no listeners.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a listener. It sees every mutation made after this call.
    pub fn subscribe(&mut self, listener: impl FnMut(&ListChange<T>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the item at `index`.
    pub fn get(&self, index: usize) -> ModelResult<&T> {
        self.items.get(index).ok_or(ModelError::OutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn check_index(&self, index: usize) -> ModelResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(ModelError::OutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    fn notify(&mut self, change: &ListChange<T>) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(change);
        }
    }
}

impl<T: Clone> ObservableList<T> {
    /// Append `item` at the end.
    pub fn push(&mut self, item: T) {
        let index = self.items.len();
        let change = ListChange::Inserted {
            index,
            item: item.clone(),
        };
        self.items.push(item);
        self.notify(&change);
    }

    /// Insert `item` at `index`, shifting later items up. `index == len` appends.
    pub fn insert(&mut self, index: usize, item: T) -> ModelResult<()> {
        if index > self.items.len() {
            return Err(ModelError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let change = ListChange::Inserted {
            index,
            item: item.clone(),
        };
        self.items.insert(index, item);
        self.notify(&change);
        Ok(())
    }

    /// Remove and return the item at `index`, shifting later items down.
    pub fn remove(&mut self, index: usize) -> ModelResult<T> {
        self.check_index(index)?;
        let item = self.items.remove(index);
        self.notify(&ListChange::Removed {
            index,
            item: item.clone(),
        });
        Ok(item)
    }

    /// Replace the item at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, item: T) -> ModelResult<T> {
        self.check_index(index)?;
        let new = item.clone();
        let old = std::mem::replace(&mut self.items[index], item);
        self.notify(&ListChange::Replaced {
            index,
            old: old.clone(),
            new,
        });
        Ok(old)
    }

    /// Replace the whole content with `items`.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        let len = self.items.len();
        self.notify(&ListChange::Reset { len });
    }
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Copies the items only; listeners stay with the original.
impl<T: Clone> Clone for ObservableList<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T: PartialEq> PartialEq for ObservableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableList")
            .field("items", &self.items)
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a ObservableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
