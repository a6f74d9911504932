//! Synchronous change notification for the UI-owned stores.

use std::fmt;

/// Handle returned by [`Observers::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

/// A list of callbacks invoked in subscription order.
pub struct Observers<T> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if the id was unknown or already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, value: &T) {
        for (_, callback) in self.entries.iter_mut() {
            callback(value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::new();
        let first = Rc::clone(&seen);
        observers.subscribe(move |v: &u8| first.borrow_mut().push(("a", *v)));
        let second = Rc::clone(&seen);
        observers.subscribe(move |v: &u8| second.borrow_mut().push(("b", *v)));

        observers.notify(&7);

        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::new();
        let counter = Rc::clone(&count);
        let id = observers.subscribe(move |_: &()| *counter.borrow_mut() += 1);

        observers.notify(&());
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify(&());

        assert_eq!(*count.borrow(), 1);
        assert!(observers.is_empty());
    }
}
