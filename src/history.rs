//! Bounded most-recent-first list of committed colours.
//!
//! The host owns one history and hands it to every panel that needs it. Parties
//! that mirror the list (the recent-colours tray) subscribe and receive the whole
//! list after every push.

use std::collections::VecDeque;

use sampler_ui::{ObserverId, ObserverList};

use crate::color_space::Rgb;

pub struct RecentColorsHistory {
    colors: VecDeque<Rgb>,
    capacity: usize,
    observers: ObserverList<[Rgb]>,
}

impl RecentColorsHistory {
    /// Create an empty history. A capacity of zero keeps nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            colors: VecDeque::with_capacity(capacity),
            capacity,
            observers: ObserverList::new(),
        }
    }

    /// Create a history pre-filled with `colors`, most recent first.
    pub fn with_colors(capacity: usize, colors: impl IntoIterator<Item = Rgb>) -> Self {
        let mut history = Self::new(capacity);
        for rgb in colors {
            if history.colors.len() == capacity {
                break;
            }
            if !history.colors.contains(&rgb) {
                history.colors.push_back(rgb);
            }
        }
        history
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colour at `index`, 0 being the most recent.
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// All colours, most recent first.
    pub fn colors(&self) -> Vec<Rgb> {
        self.colors.iter().copied().collect()
    }

    /// Put `rgb` at the front, then notify observers.
    ///
    /// A colour already in the list is moved rather than duplicated; the oldest
    /// entry is evicted when the list is full.
    pub fn push(&mut self, rgb: Rgb) {
        if let Some(pos) = self.colors.iter().position(|c| *c == rgb) {
            self.colors.remove(pos);
        }
        self.colors.push_front(rgb);
        self.colors.truncate(self.capacity);
        log::debug!("RecentColorsHistory: pushed {rgb:?} ({} kept)", self.colors.len());

        let snapshot = self.colors();
        self.observers.notify(&snapshot);
    }

    pub fn subscribe<F>(&mut self, f: F) -> ObserverId
    where
        F: Fn(&[Rgb]) + 'static,
    {
        self.observers.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl std::fmt::Debug for RecentColorsHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentColorsHistory")
            .field("colors", &self.colors)
            .field("capacity", &self.capacity)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn grey(v: f64) -> Rgb {
        Rgb::new(v, v, v)
    }

    #[test]
    fn test_push_most_recent_first() {
        let mut history = RecentColorsHistory::new(3);
        history.push(grey(0.1));
        history.push(grey(0.2));
        assert_eq!(history.colors(), vec![grey(0.2), grey(0.1)]);
        assert_eq!(history.get(0), Some(grey(0.2)));
        assert_eq!(history.get(5), None);
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut history = RecentColorsHistory::new(3);
        for v in [0.1, 0.2, 0.3, 0.4] {
            history.push(grey(v));
        }
        assert_eq!(history.colors(), vec![grey(0.4), grey(0.3), grey(0.2)]);
    }

    #[test]
    fn test_push_existing_moves_to_front() {
        let mut history = RecentColorsHistory::new(3);
        for v in [0.1, 0.2, 0.3] {
            history.push(grey(v));
        }
        history.push(grey(0.1));
        assert_eq!(history.colors(), vec![grey(0.1), grey(0.3), grey(0.2)]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut history = RecentColorsHistory::new(0);
        history.push(Rgb::RED);
        assert!(history.is_empty());
    }

    #[test]
    fn test_with_colors_dedupes_and_bounds() {
        let history =
            RecentColorsHistory::with_colors(2, [Rgb::RED, Rgb::RED, Rgb::WHITE, Rgb::BLACK]);
        assert_eq!(history.colors(), vec![Rgb::RED, Rgb::WHITE]);
    }

    #[test]
    fn test_observers_receive_full_list() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut history = RecentColorsHistory::new(5);
        let sink = Rc::clone(&seen);
        let id = history.subscribe(move |colors: &[Rgb]| *sink.borrow_mut() = colors.to_vec());
        history.push(Rgb::RED);
        history.push(Rgb::WHITE);
        assert_eq!(*seen.borrow(), vec![Rgb::WHITE, Rgb::RED]);

        assert!(history.unsubscribe(id));
        history.push(Rgb::BLACK);
        assert_eq!(seen.borrow().len(), 2);
    }
}
