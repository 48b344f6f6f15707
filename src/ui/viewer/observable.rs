// SPDX-License-Identifier: MPL-2.0
//! Observable properties with change notification.

use std::cell::{Cell, RefCell};
use std::fmt;

/// Handle returned by [`Observable::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// A value whose subscribers run whenever it actually changes.
///
/// Single-threaded. Subscribers may subscribe, unsubscribe or write a new
/// value while being notified; those edits take effect from the next round.
pub struct Observable<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber<T>)>>,
    removed: RefCell<Vec<SubscriptionId>>,
    notifying: Cell<bool>,
    next_id: Cell<u64>,
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value.borrow())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

impl<T: Clone + PartialEq> Observable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subscribers: RefCell::new(Vec::new()),
            removed: RefCell::new(Vec::new()),
            notifying: Cell::new(false),
            next_id: Cell::new(0),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Registers `callback`, called with each new value.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Box::new(callback)));
        id
    }

    /// Removes a subscriber. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        if self.notifying.get() {
            // The list is checked out for notification; prune when it comes back.
            self.removed.borrow_mut().push(id);
        } else {
            self.subscribers.borrow_mut().retain(|(sub, _)| *sub != id);
        }
    }

    /// Stores `value` and notifies subscribers if it differs from the current one.
    ///
    /// A subscriber writing to the same observable does not notify
    /// recursively: once the current round ends, every subscriber is
    /// notified again with the latest value. Returns whether a change
    /// happened.
    pub fn set(&self, value: T) -> bool {
        if *self.value.borrow() == value {
            return false;
        }
        *self.value.borrow_mut() = value;
        if self.notifying.get() {
            return true;
        }

        self.notifying.set(true);
        let mut delivered: Option<T> = None;
        loop {
            let current = self.get();
            if delivered.as_ref() == Some(&current) {
                break;
            }
            let mut checked_out = std::mem::take(&mut *self.subscribers.borrow_mut());
            for (_, callback) in &mut checked_out {
                callback(&current);
            }
            self.restore(checked_out);
            delivered = Some(current);
        }
        self.notifying.set(false);
        true
    }

    fn restore(&self, mut checked_out: Vec<(SubscriptionId, Subscriber<T>)>) {
        let mut subscribers = self.subscribers.borrow_mut();
        // Anything subscribed during notification was pushed onto the empty list.
        checked_out.append(&mut subscribers);
        let removed = std::mem::take(&mut *self.removed.borrow_mut());
        checked_out.retain(|(id, _)| !removed.contains(id));
        *subscribers = checked_out;
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}
