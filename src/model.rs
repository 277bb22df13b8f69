//! The shared colour value every selector reads from and writes to.

use sampler_ui::{ObserverId, ObserverList};

use crate::color_space::{Color, Hsv, Rgb};

/// Authoritative current colour, the last committed colours, and change observers.
///
/// A commit (`set_color`) ends a selection. A live edit (`preview_color`) moves
/// only the current colour, so `previous` keeps showing the colour from before
/// the gesture.
pub struct ColorModel {
    current: Color,
    committed: Color,
    previous: Color,
    observers: ObserverList<Color>,
}

impl ColorModel {
    pub fn new(initial: Color) -> Self {
        Self {
            current: initial,
            committed: initial,
            previous: initial,
            observers: ObserverList::new(),
        }
    }

    pub fn current(&self) -> Color {
        self.current
    }

    /// The committed colour the current one replaces.
    pub fn previous(&self) -> Color {
        self.previous
    }

    /// Set from RGB. An achromatic value keeps the current hue.
    ///
    /// Returns false, without notifying, if nothing changed.
    pub fn set_rgb(&mut self, rgb: Rgb) -> bool {
        let color = self.current.with_rgb(rgb);
        self.set_color(color)
    }

    /// Set from HSV, storing the triple exactly.
    pub fn set_hsv(&mut self, hsv: Hsv) -> bool {
        self.set_color(Color::from_hsv(hsv))
    }

    /// Commit `color` and notify every observer once, in registration order.
    ///
    /// Committing the colour a live edit already shows moves `previous` but
    /// does not notify again. Returns whether observers were notified.
    pub fn set_color(&mut self, color: Color) -> bool {
        if color == self.current && color == self.committed {
            log::trace!("ColorModel: unchanged {:?}", color.rgb());
            return false;
        }
        self.previous = self.committed;
        self.committed = color;
        self.replace_current(color)
    }

    /// Show `color` while a gesture is still running. `previous` is left on
    /// the last committed colour.
    pub fn preview_color(&mut self, color: Color) -> bool {
        self.previous = self.committed;
        self.replace_current(color)
    }

    fn replace_current(&mut self, color: Color) -> bool {
        if color == self.current {
            return false;
        }
        log::trace!("ColorModel: {:?} -> {:?}", self.current.rgb(), color.rgb());
        self.current = color;
        self.observers.notify(&self.current);
        true
    }

    pub fn subscribe<F>(&mut self, f: F) -> ObserverId
    where
        F: Fn(&Color) + 'static,
    {
        self.observers.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::new(Color::default())
    }
}

impl std::fmt::Debug for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorModel")
            .field("current", &self.current)
            .field("committed", &self.committed)
            .field("previous", &self.previous)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_set_rgb_updates_hsv() {
        let mut model = ColorModel::default();
        assert!(model.set_rgb(Rgb::new(0.0, 0.0, 1.0)));
        let hsv = model.current().hsv();
        assert!((hsv.h - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 1.0);
    }

    #[test]
    fn test_set_rgb_grey_keeps_hue() {
        let mut model = ColorModel::default();
        model.set_hsv(Hsv::new(0.3, 1.0, 1.0));
        model.set_rgb(Rgb::new(0.5, 0.5, 0.5));
        assert_eq!(model.current().hsv().h, 0.3);
        assert_eq!(model.current().hsv().s, 0.0);
    }

    #[test]
    fn test_set_hsv_stores_exact_triple() {
        let mut model = ColorModel::default();
        let hsv = Hsv::new(0.7, 0.0, 0.0);
        model.set_hsv(hsv);
        assert_eq!(model.current().hsv(), hsv);
        assert_eq!(model.current().rgb(), Rgb::BLACK);
    }

    #[test]
    fn test_previous_tracks_last_change() {
        let mut model = ColorModel::new(Color::from_rgb(Rgb::WHITE));
        model.set_rgb(Rgb::RED);
        model.set_rgb(Rgb::BLACK);
        assert_eq!(model.previous().rgb(), Rgb::RED);
        assert_eq!(model.current().rgb(), Rgb::BLACK);
    }

    #[test]
    fn test_observers_called_in_order_once_per_change() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut model = ColorModel::default();
        for tag in ["a", "b"] {
            let log = Rc::clone(&log);
            model.subscribe(move |c: &Color| log.borrow_mut().push((tag, c.rgb())));
        }
        model.set_rgb(Rgb::WHITE);
        assert_eq!(
            *log.borrow(),
            vec![("a", Rgb::WHITE), ("b", Rgb::WHITE)]
        );
    }

    #[test]
    fn test_unchanged_color_is_not_broadcast() {
        let count = Rc::new(RefCell::new(0));
        let mut model = ColorModel::default();
        let counter = Rc::clone(&count);
        model.subscribe(move |_| *counter.borrow_mut() += 1);
        let current = model.current();
        assert!(!model.set_color(current));
        assert!(!model.set_rgb(current.rgb()));
        assert_eq!(*count.borrow(), 0);
        assert_eq!(model.previous(), current);
    }

    #[test]
    fn test_preview_keeps_previous_on_committed_color() {
        let mut model = ColorModel::default();
        let start = model.current();
        assert!(model.preview_color(Color::from_hsv(Hsv::new(0.5, 1.0, 1.0))));
        assert!(model.preview_color(Color::from_hsv(Hsv::new(0.55, 1.0, 1.0))));
        assert_eq!(model.previous(), start);

        // release commits what the last motion step already showed
        let end = Color::from_hsv(Hsv::new(0.55, 1.0, 1.0));
        assert!(!model.set_color(end));
        assert_eq!(model.current(), end);
        assert_eq!(model.previous(), start);

        // the next gesture compares against the colour just committed
        model.preview_color(Color::from_rgb(Rgb::WHITE));
        assert_eq!(model.previous(), end);
    }

    #[test]
    fn test_recommitting_same_color_keeps_previous() {
        let mut model = ColorModel::default();
        model.set_rgb(Rgb::WHITE);
        assert!(!model.set_rgb(Rgb::WHITE));
        assert_eq!(model.previous(), Color::default());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut model = ColorModel::default();
        let counter = Rc::clone(&count);
        let id = model.subscribe(move |_| *counter.borrow_mut() += 1);
        model.set_rgb(Rgb::WHITE);
        assert!(model.unsubscribe(id));
        model.set_rgb(Rgb::BLACK);
        assert_eq!(*count.borrow(), 1);
    }
}
