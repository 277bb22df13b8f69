//! One slider type for every colour channel.

use sampler_ui::{
    Bounds, Color as RenderColor, Event, GradientDirection, Point, Renderer, Size, Widget,
};

use super::gesture::{GestureStep, PointerGesture};
use super::SelectorMessage;
use crate::color_space::{Color, Hsv, Rgb};
use crate::constants::{CHANNEL_ROW_HEIGHT, CSTEP, HUE_SPIN_MAX, PERCENT_SPIN_MAX, RGB_SPIN_MAX};
use crate::coordinator::ColorSelector;

/// A single component of a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Value,
}

impl Channel {
    pub const RGB: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
    pub const HSV: [Channel; 3] = [Channel::Hue, Channel::Saturation, Channel::Value];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
            Channel::Hue => "H",
            Channel::Saturation => "S",
            Channel::Value => "V",
        }
    }

    /// Largest value shown in this channel's numeric field.
    pub fn spin_max(self) -> u32 {
        match self {
            Channel::Red | Channel::Green | Channel::Blue => RGB_SPIN_MAX,
            Channel::Hue => HUE_SPIN_MAX,
            Channel::Saturation | Channel::Value => PERCENT_SPIN_MAX,
        }
    }

    pub fn value_of(self, color: &Color) -> f64 {
        let Rgb { r, g, b } = color.rgb();
        let Hsv { h, s, v } = color.hsv();
        match self {
            Channel::Red => r,
            Channel::Green => g,
            Channel::Blue => b,
            Channel::Hue => h,
            Channel::Saturation => s,
            Channel::Value => v,
        }
    }

    /// `color` with this channel replaced by `x`.
    ///
    /// HSV channels keep the other two HSV components exactly. RGB channels keep
    /// the hue when the result is achromatic.
    pub fn with_value(self, color: &Color, x: f64) -> Color {
        let rgb = color.rgb();
        let hsv = color.hsv();
        match self {
            Channel::Red => color.with_rgb(Rgb { r: x, ..rgb }),
            Channel::Green => color.with_rgb(Rgb { g: x, ..rgb }),
            Channel::Blue => color.with_rgb(Rgb { b: x, ..rgb }),
            Channel::Hue => Color::from_hsv(hsv.with_hue(x)),
            Channel::Saturation => Color::from_hsv(hsv.with_saturation(x)),
            Channel::Value => Color::from_hsv(hsv.with_value(x)),
        }
    }
}

/// Horizontal slider over one channel: left edge is 0, right edge is 1.
pub struct LinearChannelSelector {
    channel: Channel,
    color: Color,
    gesture: PointerGesture,
}

impl LinearChannelSelector {
    pub fn new(channel: Channel, color: Color) -> Self {
        Self {
            channel,
            color,
            gesture: PointerGesture::new(),
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn value(&self) -> f64 {
        self.channel.value_of(&self.color)
    }

    /// Colour for a pointer at `position`, clamped to the slider's ends.
    pub fn color_at(&self, position: Point, bounds: Bounds) -> Color {
        let x = if bounds.width > 0.0 {
            f64::from((position.x - bounds.x) / bounds.width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.channel.with_value(&self.color, x)
    }

    fn draw_hue_strips(&self, renderer: &mut Renderer, bounds: Bounds) {
        let Hsv { s, v, .. } = self.color.hsv();
        let dx = bounds.width * CSTEP as f32;
        let count = (1.0 / CSTEP).ceil() as usize;
        for i in 0..count {
            let h = i as f64 * CSTEP;
            let rect = Bounds::new(bounds.x + i as f32 * dx, bounds.y, dx, bounds.height);
            renderer.fill_rect(rect, Hsv::new(h, s, v).to_rgb().to_render_color());
        }
    }
}

impl Widget<SelectorMessage> for LinearChannelSelector {
    fn layout(&mut self, available: Size) -> Size {
        Size::new(available.width, CHANNEL_ROW_HEIGHT.min(available.height))
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        if self.channel == Channel::Hue {
            self.draw_hue_strips(renderer, bounds);
        } else {
            let start = self.channel.with_value(&self.color, 0.0);
            let end = self.channel.with_value(&self.color, 1.0);
            renderer.fill_gradient_rect(
                bounds,
                start.to_render_color(),
                end.to_render_color(),
                GradientDirection::Horizontal,
            );
        }

        let x = bounds.x + self.value() as f32 * bounds.width;
        renderer.line(
            Point::new(x, bounds.y),
            Point::new(x, bounds.y + bounds.height),
            RenderColor::BLACK,
            1.0,
        );
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<SelectorMessage> {
        match self.gesture.update(event) {
            GestureStep::Moved { position, .. } => {
                self.gesture.grab();
                self.color = self.color_at(position, bounds);
                Some(SelectorMessage::Edited(self.color))
            }
            GestureStep::Released {
                position,
                select: true,
                ..
            } => {
                self.color = self.color_at(position, bounds);
                log::debug!(
                    "LinearChannelSelector: {} = {:.3}",
                    self.channel.label(),
                    self.value()
                );
                Some(SelectorMessage::Committed(self.color))
            }
            _ => None,
        }
    }
}

impl ColorSelector for LinearChannelSelector {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn name(&self) -> &'static str {
        self.channel.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sampler_ui::{DrawCommand, MouseButton};

    const EPSILON: f64 = 1e-9;

    fn bounds() -> Bounds {
        Bounds::new(10.0, 0.0, 100.0, 16.0)
    }

    fn click(selector: &mut LinearChannelSelector, x: f32) -> Option<SelectorMessage> {
        let position = Point::new(x, 8.0);
        selector.on_event(
            &Event::MousePressed {
                button: MouseButton::Left,
                position,
            },
            bounds(),
        );
        selector.on_event(
            &Event::MouseReleased {
                button: MouseButton::Left,
                position,
            },
            bounds(),
        )
    }

    #[test]
    fn test_value_of_each_channel() {
        let color = Color::from_rgb(Rgb::new(0.2, 0.4, 0.8));
        assert_eq!(Channel::Red.value_of(&color), 0.2);
        assert_eq!(Channel::Green.value_of(&color), 0.4);
        assert_eq!(Channel::Blue.value_of(&color), 0.8);
        assert!((Channel::Value.value_of(&color) - 0.8).abs() < EPSILON);
        assert!((Channel::Saturation.value_of(&color) - 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_hsv_channels_keep_other_components() {
        let color = Color::from_hsv(Hsv::new(0.6, 0.3, 0.0));
        let edited = Channel::Saturation.with_value(&color, 0.9);
        assert_eq!(edited.hsv(), Hsv::new(0.6, 0.9, 0.0));
    }

    #[test]
    fn test_rgb_channel_to_grey_keeps_hue() {
        let cyan = Color::from_rgb(Rgb::new(0.0, 0.5, 0.5));
        let grey = Channel::Red.with_value(&cyan, 0.5);
        assert_eq!(grey.rgb(), Rgb::new(0.5, 0.5, 0.5));
        assert!((grey.hsv().h - 0.5).abs() < EPSILON);
        assert_eq!(grey.hsv().s, 0.0);
    }

    #[test]
    fn test_click_sets_fraction_of_width() {
        let mut selector = LinearChannelSelector::new(Channel::Green, Color::default());
        let message = click(&mut selector, 35.0);
        let expected = Color::from_rgb(Rgb::new(1.0, 0.25, 0.0));
        assert_eq!(message, Some(SelectorMessage::Committed(expected)));
        assert_eq!(selector.value(), 0.25);
    }

    #[test]
    fn test_positions_outside_clamp() {
        let selector = LinearChannelSelector::new(Channel::Value, Color::default());
        assert_eq!(selector.color_at(Point::new(-50.0, 0.0), bounds()).hsv().v, 0.0);
        assert_eq!(selector.color_at(Point::new(500.0, 0.0), bounds()).hsv().v, 1.0);
    }

    #[test]
    fn test_drag_edits_live() {
        let mut selector = LinearChannelSelector::new(Channel::Hue, Color::default());
        selector.on_event(
            &Event::MousePressed {
                button: MouseButton::Left,
                position: Point::new(10.0, 8.0),
            },
            bounds(),
        );
        let message = selector.on_event(
            &Event::MouseMoved {
                position: Point::new(60.0, 8.0),
            },
            bounds(),
        );
        let color = message.and_then(|m| m.color()).unwrap_or_default();
        assert_eq!(color.hsv().h, 0.5);
    }

    #[test]
    fn test_hue_draws_strips_others_gradient() {
        let hue = LinearChannelSelector::new(Channel::Hue, Color::default());
        let mut renderer = Renderer::new();
        hue.draw(&mut renderer, bounds());
        let rects = renderer
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
            .count();
        assert_eq!(rects, 143);

        let red = LinearChannelSelector::new(Channel::Red, Color::default());
        let mut renderer = Renderer::new();
        red.draw(&mut renderer, bounds());
        assert!(matches!(
            renderer.commands()[0],
            DrawCommand::FillGradientRect { .. }
        ));
        // marker line at the right edge for a full red channel
        assert!(matches!(
            renderer.commands()[1],
            DrawCommand::Line { from, .. } if from.x == 110.0
        ));
    }

    #[test]
    fn test_spin_ranges() {
        assert_eq!(Channel::Red.spin_max(), 255);
        assert_eq!(Channel::Hue.spin_max(), 359);
        assert_eq!(Channel::Value.spin_max(), 100);
    }
}
