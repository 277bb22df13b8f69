//! Three channel sliders stacked together, each with a numeric field.

use sampler_ui::{Bounds, Event, Renderer, Size, Widget};

use super::channel::{Channel, LinearChannelSelector};
use super::SelectorMessage;
use crate::color_space::Color;
use crate::constants::CHANNEL_ROW_HEIGHT;
use crate::coordinator::ColorSelector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelGroupKind {
    Rgb,
    Hsv,
}

impl ChannelGroupKind {
    pub fn channels(self) -> [Channel; 3] {
        match self {
            ChannelGroupKind::Rgb => Channel::RGB,
            ChannelGroupKind::Hsv => Channel::HSV,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChannelGroupKind::Rgb => "RGB",
            ChannelGroupKind::Hsv => "HSV",
        }
    }
}

/// RGB or HSV sliders plus the integer values shown next to them.
///
/// Editing one slider updates its two siblings directly; the coordinator only
/// needs to update the other selectors.
pub struct ChannelGroup {
    kind: ChannelGroupKind,
    color: Color,
    rows: [LinearChannelSelector; 3],
    spins: [u32; 3],
    /// Row that received the last press; it keeps events until release.
    active: Option<usize>,
}

impl ChannelGroup {
    pub fn new(kind: ChannelGroupKind, color: Color) -> Self {
        let mut group = Self {
            kind,
            color,
            rows: kind
                .channels()
                .map(|channel| LinearChannelSelector::new(channel, color)),
            spins: [0; 3],
            active: None,
        };
        group.show(color);
        group
    }

    pub fn rgb(color: Color) -> Self {
        Self::new(ChannelGroupKind::Rgb, color)
    }

    pub fn hsv(color: Color) -> Self {
        Self::new(ChannelGroupKind::Hsv, color)
    }

    pub fn kind(&self) -> ChannelGroupKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn rows(&self) -> &[LinearChannelSelector; 3] {
        &self.rows
    }

    /// Integer values currently shown in the numeric fields.
    pub fn spin_values(&self) -> [u32; 3] {
        self.spins
    }

    /// The user typed `value` into field `index`.
    ///
    /// Returns `None` when the value is what the field already shows, which is
    /// also what a field reports when it is refreshed programmatically.
    pub fn set_spin(&mut self, index: usize, value: u32) -> Option<SelectorMessage> {
        let channel = *self.kind.channels().get(index)?;
        let max = channel.spin_max();
        let value = value.min(max);
        if self.spins[index] == value {
            return None;
        }
        let color = channel.with_value(&self.color, f64::from(value) / f64::from(max));
        log::debug!("ChannelGroup: {} field = {value}", channel.label());
        self.show(color);
        Some(SelectorMessage::Committed(color))
    }

    fn show(&mut self, color: Color) {
        self.color = color;
        for row in &mut self.rows {
            row.set_color(color);
        }
        for (spin, channel) in self.spins.iter_mut().zip(self.kind.channels()) {
            *spin = spin_value(channel, &color);
        }
    }
}

fn spin_value(channel: Channel, color: &Color) -> u32 {
    let max = channel.spin_max();
    (channel.value_of(color) * f64::from(max))
        .round()
        .clamp(0.0, f64::from(max)) as u32
}

impl Widget<SelectorMessage> for ChannelGroup {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(available.width, (3.0 * CHANNEL_ROW_HEIGHT).min(available.height))
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        for (row, row_bounds) in self.rows.iter().zip(bounds.rows(3)) {
            row.draw(renderer, row_bounds);
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<SelectorMessage> {
        let row_bounds = bounds.rows(3);
        if let Event::MousePressed { position, .. } = event {
            self.active = row_bounds
                .iter()
                .position(|b| b.contains(position.x, position.y));
        }
        let index = self.active?;
        let message = self.rows[index].on_event(event, row_bounds[index]);
        if matches!(event, Event::MouseReleased { .. }) {
            self.active = None;
        }
        if let Some(color) = message.as_ref().and_then(SelectorMessage::color) {
            self.show(color);
        }
        message
    }
}

impl ColorSelector for ChannelGroup {
    fn set_color(&mut self, color: Color) {
        self.show(color);
    }

    fn name(&self) -> &'static str {
        self.kind.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_space::{Hsv, Rgb};
    use sampler_ui::{MouseButton, Point};

    fn bounds() -> Bounds {
        Bounds::new(0.0, 0.0, 100.0, 48.0)
    }

    #[test]
    fn test_spin_values_rgb() {
        let group = ChannelGroup::rgb(Color::from_rgb(Rgb::new(1.0, 0.5, 0.0)));
        assert_eq!(group.spin_values(), [255, 128, 0]);
    }

    #[test]
    fn test_spin_values_hsv() {
        let group = ChannelGroup::hsv(Color::from_hsv(Hsv::new(0.5, 0.25, 1.0)));
        assert_eq!(group.spin_values(), [180, 25, 100]);
    }

    #[test]
    fn test_spin_edit_emits_commit() {
        let mut group = ChannelGroup::rgb(Color::from_rgb(Rgb::BLACK));
        let message = group.set_spin(2, 255);
        let expected = Color::from_rgb(Rgb::new(0.0, 0.0, 1.0));
        assert_eq!(message, Some(SelectorMessage::Committed(expected)));
        assert_eq!(group.spin_values(), [0, 0, 255]);
        assert_eq!(group.rows()[0].color(), expected);
    }

    #[test]
    fn test_spin_echo_is_ignored() {
        let mut group = ChannelGroup::hsv(Color::default());
        let [h, s, v] = group.spin_values();
        assert_eq!(group.set_spin(0, h), None);
        assert_eq!(group.set_spin(1, s), None);
        assert_eq!(group.set_spin(2, v), None);
        assert_eq!(group.set_spin(3, 1), None);
    }

    #[test]
    fn test_spin_clamps_to_range() {
        let mut group = ChannelGroup::hsv(Color::from_hsv(Hsv::new(0.0, 0.0, 0.5)));
        let message = group.set_spin(1, 500);
        assert_eq!(message.and_then(|m| m.color()).map(|c| c.hsv().s), Some(1.0));
        assert_eq!(group.spin_values()[1], 100);
    }

    #[test]
    fn test_hue_spin_uses_359_scale() {
        let mut group = ChannelGroup::hsv(Color::from_hsv(Hsv::new(0.0, 1.0, 1.0)));
        let color = group.set_spin(0, 359).and_then(|m| m.color()).unwrap_or_default();
        assert_eq!(color.hsv().h, 1.0);
    }

    #[test]
    fn test_slider_edit_updates_siblings() {
        let mut group = ChannelGroup::rgb(Color::from_rgb(Rgb::BLACK));
        // press and release in the middle of the green row
        for event in [
            Event::MousePressed {
                button: MouseButton::Left,
                position: Point::new(50.0, 24.0),
            },
            Event::MouseReleased {
                button: MouseButton::Left,
                position: Point::new(50.0, 24.0),
            },
        ] {
            group.on_event(&event, bounds());
        }
        let expected = Rgb::new(0.0, 0.5, 0.0);
        assert_eq!(group.color().rgb(), expected);
        assert_eq!(group.rows()[0].color().rgb(), expected);
        assert_eq!(group.rows()[2].color().rgb(), expected);
        assert_eq!(group.spin_values(), [0, 128, 0]);
    }

    #[test]
    fn test_press_outside_rows_is_ignored() {
        let mut group = ChannelGroup::rgb(Color::default());
        let event = Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(50.0, 100.0),
        };
        assert_eq!(group.on_event(&event, bounds()), None);
    }

    #[test]
    fn test_set_color_refreshes_fields() {
        let mut group = ChannelGroup::rgb(Color::default());
        group.set_color(Color::from_rgb(Rgb::WHITE));
        assert_eq!(group.spin_values(), [255, 255, 255]);
    }
}
