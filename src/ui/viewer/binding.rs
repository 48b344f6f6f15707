// SPDX-License-Identifier: MPL-2.0
//! Two-way binding for the displayed image.
//!
//! The presenting parent owns the value; the viewer holds a clone of the
//! binding and both sides may write. Every write that changes presence is
//! queued so the viewer observes `Some → None → Some` sequences in order
//! even when they happen between two of its updates. Repeated toggles
//! collapse, so the queue stays short however long the viewer is idle.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// A presence change recorded by [`Binding::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A value was written (including replacing one value with another).
    Presented,
    /// The value was cleared.
    Cleared,
}

struct Inner<T> {
    value: Option<T>,
    changes: VecDeque<Change>,
}

/// Shared, single-threaded optional value with ordered change tracking.
pub struct Binding<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Binding")
            .field("is_some", &inner.value.is_some())
            .field("pending_changes", &inner.changes.len())
            .finish()
    }
}

impl<T> Default for Binding<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<T> Binding<T> {
    /// Creates a binding holding `value`. No change is queued for it.
    #[must_use]
    pub fn new(value: Option<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                changes: VecDeque::new(),
            })),
        }
    }

    /// Writes a new value. Clearing an already empty binding is not a change.
    pub fn set(&self, value: Option<T>) {
        let mut inner = self.inner.borrow_mut();
        let change = match (inner.value.is_some(), value.is_some()) {
            (false, false) => None,
            (_, true) => Some(Change::Presented),
            (true, false) => Some(Change::Cleared),
        };
        inner.value = value;
        if let Some(change) = change {
            record(&mut inner.changes, change);
        }
    }

    /// Shorthand for `set(None)`.
    pub fn clear(&self) {
        self.set(None);
    }

    #[must_use]
    pub fn is_some(&self) -> bool {
        self.inner.borrow().value.is_some()
    }

    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        !self.inner.borrow().changes.is_empty()
    }

    /// Drains the queued changes, oldest first.
    pub(crate) fn take_changes(&self) -> Vec<Change> {
        self.inner.borrow_mut().changes.drain(..).collect()
    }
}

/// Queues `change`, collapsing runs so the queue holds at most one
/// `Cleared`/`Presented` edge pair.
fn record(changes: &mut VecDeque<Change>, change: Change) {
    if changes.back() == Some(&change) {
        return;
    }
    // `A B A` replays the same as `A`.
    if changes.len() >= 2 && changes[changes.len() - 2] == change {
        changes.pop_back();
        return;
    }
    changes.push_back(change);
}

impl<T: Clone> Binding<T> {
    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.inner.borrow().value.clone()
    }
}
