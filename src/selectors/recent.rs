//! A row of swatches mirroring the recent-colours history.

use std::cell::RefCell;
use std::rc::Rc;

use sampler_ui::{Bounds, Color as RenderColor, Event, ObserverId, Point, Renderer, Size, Widget};

use super::gesture::{GestureStep, PointerGesture};
use super::SelectorMessage;
use crate::color_space::{Color, Rgb};
use crate::constants::{DEFAULT_DRAG_THRESHOLD, PADDING, RECENT_SLOT_SIZE};
use crate::coordinator::ColorSelector;
use crate::dnd::DragPayload;
use crate::history::RecentColorsHistory;

pub struct RecentColorsTray {
    /// Most recent first; `None` for slots the history has not filled yet.
    slots: Vec<Option<Rgb>>,
    /// Current panel colour; its hue carries over to achromatic slots.
    color: Color,
    gesture: PointerGesture,
    pressed_slot: Option<usize>,
    drag_threshold: f32,
}

impl RecentColorsTray {
    /// An empty tray with `count` slots.
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count],
            color: Color::default(),
            gesture: PointerGesture::new(),
            pressed_slot: None,
            drag_threshold: DEFAULT_DRAG_THRESHOLD as f32,
        }
    }

    /// A tray sized to `history` and showing its current colours.
    pub fn for_history(history: &RecentColorsHistory) -> Self {
        let mut tray = Self::new(history.capacity());
        tray.refill(&history.colors());
        tray
    }

    pub fn drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    /// Keep `tray` in sync with every push to `history`.
    ///
    /// The subscription holds the tray weakly; once the tray is dropped the
    /// observer does nothing.
    pub fn attach(tray: &Rc<RefCell<Self>>, history: &mut RecentColorsHistory) -> ObserverId {
        let weak = Rc::downgrade(tray);
        history.subscribe(move |colors: &[Rgb]| {
            if let Some(tray) = weak.upgrade() {
                tray.borrow_mut().refill(colors);
            }
        })
    }

    /// Replace the slot contents with `colors`, most recent first.
    pub fn refill(&mut self, colors: &[Rgb]) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = colors.get(i).copied();
        }
        log::trace!("RecentColorsTray: refilled with {} colours", colors.len());
    }

    pub fn slots(&self) -> &[Option<Rgb>] {
        &self.slots
    }

    fn slot_bounds(&self, bounds: Bounds) -> Vec<Bounds> {
        bounds.columns(self.slots.len())
    }

    fn slot_at(&self, position: Point, bounds: Bounds) -> Option<usize> {
        self.slot_bounds(bounds)
            .iter()
            .position(|b| b.contains(position.x, position.y))
    }

    fn pressed_color(&self) -> Option<Rgb> {
        self.pressed_slot.and_then(|i| self.slots.get(i).copied().flatten())
    }
}

impl Widget<SelectorMessage> for RecentColorsTray {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(available.width, RECENT_SLOT_SIZE.min(available.height))
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        for (slot, slot_bounds) in self.slots.iter().zip(self.slot_bounds(bounds)) {
            let inner = slot_bounds.shrink(PADDING);
            match slot {
                Some(rgb) => renderer.fill_rect(inner, rgb.to_render_color()),
                None => renderer.stroke_rect(inner, RenderColor::GREY, 1.0),
            }
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<SelectorMessage> {
        match self.gesture.update(event) {
            GestureStep::Pressed(position) => {
                self.pressed_slot = self.slot_at(position, bounds);
                None
            }
            GestureStep::Moved { distance, .. } => {
                if distance <= self.drag_threshold {
                    return None;
                }
                let rgb = self.pressed_color()?;
                self.gesture.begin_drag();
                log::debug!("RecentColorsTray: dragging {rgb:?}");
                Some(SelectorMessage::DragBegin(DragPayload::new(rgb)))
            }
            GestureStep::Released { select, .. } => {
                let rgb = self.pressed_color();
                self.pressed_slot = None;
                if !select {
                    return None;
                }
                rgb.map(|rgb| SelectorMessage::Committed(self.color.with_rgb(rgb)))
            }
            GestureStep::Idle => None,
        }
    }
}

impl ColorSelector for RecentColorsTray {
    /// Swatches show history; the colour is kept only for its hue.
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn name(&self) -> &'static str {
        "recent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_space::Hsv;
    use sampler_ui::MouseButton;

    fn bounds() -> Bounds {
        Bounds::new(0.0, 0.0, 160.0, 32.0)
    }

    fn press(x: f32) -> Event {
        Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(x, 16.0),
        }
    }

    fn release(x: f32) -> Event {
        Event::MouseReleased {
            button: MouseButton::Left,
            position: Point::new(x, 16.0),
        }
    }

    fn tray_with(colors: &[Rgb]) -> RecentColorsTray {
        let mut tray = RecentColorsTray::new(5);
        tray.refill(colors);
        tray
    }

    #[test]
    fn test_click_selects_slot_color() {
        let mut tray = tray_with(&[Rgb::RED, Rgb::WHITE]);
        tray.on_event(&press(40.0), bounds());
        let message = tray.on_event(&release(40.0), bounds());
        assert_eq!(
            message,
            Some(SelectorMessage::Committed(Color::from_rgb(Rgb::WHITE)))
        );
    }

    #[test]
    fn test_click_grey_slot_keeps_current_hue() {
        let teal = Color::from_hsv(Hsv::new(0.45, 0.8, 0.6));
        let grey = Rgb::new(0.5, 0.5, 0.5);
        let mut tray = tray_with(&[grey]);
        tray.set_color(teal);

        tray.on_event(&press(10.0), bounds());
        let Some(SelectorMessage::Committed(color)) = tray.on_event(&release(10.0), bounds())
        else {
            panic!("expected a committed colour");
        };
        assert_eq!(color.rgb(), grey);
        assert_eq!(color.hsv().h, 0.45);
        assert_eq!(color.hsv().s, 0.0);
    }

    #[test]
    fn test_click_empty_slot_does_nothing() {
        let mut tray = tray_with(&[Rgb::RED]);
        tray.on_event(&press(150.0), bounds());
        assert_eq!(tray.on_event(&release(150.0), bounds()), None);
    }

    #[test]
    fn test_slot_drag_after_threshold() {
        let mut tray = tray_with(&[Rgb::RED]);
        tray.on_event(&press(10.0), bounds());
        let small = Event::MouseMoved {
            position: Point::new(20.0, 16.0),
        };
        assert_eq!(tray.on_event(&small, bounds()), None);
        let far = Event::MouseMoved {
            position: Point::new(40.0, 16.0),
        };
        assert_eq!(
            tray.on_event(&far, bounds()),
            Some(SelectorMessage::DragBegin(DragPayload::new(Rgb::RED)))
        );
        assert_eq!(tray.on_event(&release(40.0), bounds()), None);
    }

    #[test]
    fn test_set_color_is_ignored() {
        let mut tray = tray_with(&[Rgb::RED]);
        tray.set_color(Color::from_rgb(Rgb::WHITE));
        assert_eq!(tray.slots()[0], Some(Rgb::RED));
    }

    #[test]
    fn test_attached_tray_follows_history() {
        let mut history = RecentColorsHistory::new(3);
        let tray = Rc::new(RefCell::new(RecentColorsTray::for_history(&history)));
        RecentColorsTray::attach(&tray, &mut history);

        history.push(Rgb::RED);
        history.push(Rgb::WHITE);
        assert_eq!(
            tray.borrow().slots(),
            &[Some(Rgb::WHITE), Some(Rgb::RED), None]
        );

        drop(tray);
        history.push(Rgb::BLACK);
    }

    #[test]
    fn test_draw_fills_known_slots() {
        let tray = tray_with(&[Rgb::RED, Rgb::WHITE]);
        let mut renderer = Renderer::new();
        tray.draw(&mut renderer, bounds());
        assert_eq!(renderer.len(), 5);
        assert!(matches!(
            renderer.commands()[4],
            sampler_ui::DrawCommand::StrokeRect { .. }
        ));
    }
}
