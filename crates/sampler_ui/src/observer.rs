//! Change observers for widgets and models
//!
//! Widgets report user input by returning messages from `on_event`. Side effects
//! that several parties care about go through an `ObserverList<T>` instead: any
//! number of parties register, and every `notify` calls each of them exactly once,
//! synchronously, in registration order.
//!
//! # Examples
//!
//! ```
//! use sampler_ui::ObserverList;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(Cell::new(0));
//! let mut observers: ObserverList<u32> = ObserverList::new();
//! let sink = Rc::clone(&seen);
//! observers.subscribe(move |v: &u32| sink.set(*v));
//! observers.notify(&7);
//! assert_eq!(seen.get(), 7);
//! ```

use std::fmt;

// =============================================================================
// Observers
// =============================================================================

/// Handle returned by [`ObserverList::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// An ordered list of side-effect observers.
pub struct ObserverList<T: ?Sized> {
    observers: Vec<(ObserverId, Box<dyn Fn(&T)>)>,
    next_id: u64,
}

impl<T: ?Sized> ObserverList<T> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register an observer. It runs after every observer registered before it.
    pub fn subscribe<F>(&mut self, f: F) -> ObserverId
    where
        F: Fn(&T) + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(f)));
        id
    }

    /// Remove an observer. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Call every observer once, in registration order.
    pub fn notify(&self, value: &T) {
        for (_, observer) in &self.observers {
            observer(value);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<T: ?Sized> Default for ObserverList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for ObserverList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList")
            .field("count", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_observers_run_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut list: ObserverList<i32> = ObserverList::new();
        for tag in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            list.subscribe(move |v: &i32| log.borrow_mut().push(format!("{tag}{v}")));
        }
        list.notify(&1);
        assert_eq!(*log.borrow(), vec!["a1", "b1", "c1"]);
    }

    #[test]
    fn test_unsubscribe_removes_only_that_observer() {
        let hits = Rc::new(RefCell::new(0));
        let mut list: ObserverList<()> = ObserverList::new();
        let h1 = Rc::clone(&hits);
        let first = list.subscribe(move |_| *h1.borrow_mut() += 1);
        let h2 = Rc::clone(&hits);
        list.subscribe(move |_| *h2.borrow_mut() += 10);

        assert!(list.unsubscribe(first));
        assert!(!list.unsubscribe(first));
        list.notify(&());
        assert_eq!(*hits.borrow(), 10);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_unsized_payload() {
        let total = Rc::new(RefCell::new(0));
        let mut list: ObserverList<[u8]> = ObserverList::new();
        let sink = Rc::clone(&total);
        list.subscribe(move |bytes: &[u8]| *sink.borrow_mut() = bytes.len());
        let bytes: [u8; 3] = [1, 2, 3];
        list.notify(&bytes);
        assert_eq!(*total.borrow(), 3);
    }
}
