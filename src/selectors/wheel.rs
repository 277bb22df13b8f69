//! Hue ring, harmony sample band and saturation/value square in one widget.

use std::cell::RefCell;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use sampler_ui::{
    Bounds, Color as RenderColor, DrawCommand, Event, GradientDirection, Point, Renderer, Size,
    Widget,
};

use super::gesture::{GestureStep, PointerGesture};
use super::SelectorMessage;
use crate::color_space::{Color, Hsv, hsv_to_rgb};
use crate::constants::{
    CSTEP, DEFAULT_DRAG_THRESHOLD, DEFAULT_WHEEL_MARGIN, SQUARE_CURSOR_RADIUS, SQUARE_DRAW_SCALE,
};
use crate::coordinator::ColorSelector;
use crate::dnd::DragPayload;
use crate::geometry::{Region, WheelGeometry, WheelLayout};
use crate::harmony::{GlyphShape, Harmony, HarmonyEngine, HarmonyFlags, HarmonySet};

fn pt((x, y): (f64, f64)) -> Point {
    Point::new(x as f32, y as f32)
}

/// Ring spokes for one layout. Rebuilding them is the expensive part of a frame.
#[derive(Debug)]
struct RingCache {
    layout: WheelLayout,
    commands: Vec<DrawCommand>,
}

pub struct WheelSelector {
    color: Color,
    previous: Color,
    flags: HarmonyFlags,
    geometry: WheelGeometry,
    gesture: PointerGesture,
    press_region: Region,
    drag_threshold: f32,
    ring_cache: RefCell<Option<RingCache>>,
}

impl WheelSelector {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            previous: color,
            flags: HarmonyFlags::none(),
            geometry: WheelGeometry::new(DEFAULT_WHEEL_MARGIN),
            gesture: PointerGesture::new(),
            press_region: Region::None,
            drag_threshold: DEFAULT_DRAG_THRESHOLD as f32,
            ring_cache: RefCell::new(None),
        }
    }

    /// Set the margin subtracted from the shorter side.
    pub fn margin(mut self, margin: f64) -> Self {
        self.geometry = WheelGeometry::new(margin);
        self
    }

    /// Set how far the pointer travels before a sample drag starts.
    pub fn drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    /// Set the enabled harmonies.
    pub fn harmonies(mut self, flags: HarmonyFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Colour shown in the left half of the compare indicator.
    pub fn set_previous(&mut self, previous: Color) {
        self.previous = previous;
    }

    pub fn previous(&self) -> Color {
        self.previous
    }

    pub fn flags(&self) -> HarmonyFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: HarmonyFlags) {
        self.flags = flags;
    }

    /// Flip one harmony. Returns its new state.
    pub fn toggle_harmony(&mut self, harmony: Harmony) -> bool {
        self.flags.toggle(harmony)
    }

    pub fn engine(&self) -> HarmonyEngine {
        HarmonyEngine::new(self.color.hsv(), self.flags)
    }

    /// The current harmony palette.
    pub fn harmony_samples(&self) -> HarmonySet {
        self.engine().samples()
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    /// Record new bounds. The layout is recomputed lazily.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.geometry.resize(
            f64::from(bounds.x),
            f64::from(bounds.y),
            f64::from(bounds.width),
            f64::from(bounds.height),
        );
    }

    fn refresh_layout(&mut self) {
        if self.geometry.ensure_layout() {
            self.ring_cache.get_mut().take();
        }
    }

    pub fn has_ring_cache(&self) -> bool {
        self.ring_cache.borrow().is_some()
    }

    /// Colour under the pointer, or `None` outside every region.
    pub fn color_at(&self, position: Point) -> Option<Color> {
        self.color_at_xy(f64::from(position.x), f64::from(position.y))
    }

    fn color_at_xy(&self, x: f64, y: f64) -> Option<Color> {
        let hsv = self.color.hsv();
        match self.geometry.classify(x, y) {
            Region::Ring => Some(Color::from_hsv(
                hsv.with_hue(self.geometry.point_to_hue(x, y)),
            )),
            Region::SampleBand => {
                let samples = self.engine().ring_samples();
                let index = self.geometry.sample_band_index(x, y, &samples)?;
                Some(Color::from_hsv(samples[index].hsv))
            }
            Region::Square => {
                let (s, v) = self.geometry.point_to_square(x, y);
                Some(Color::from_hsv(Hsv::new(
                    hsv.h,
                    s.clamp(0.0, 1.0),
                    v.clamp(0.0, 1.0),
                )))
            }
            Region::None => None,
        }
    }

    /// Colour for a live drag, keeping the pointer inside the region it started in.
    fn drag_color_at(&self, source: Region, position: Point) -> Option<Color> {
        let (x, y) = self.geometry.nearest_draggable(
            source,
            f64::from(position.x),
            f64::from(position.y),
        )?;
        if self.geometry.classify(x, y) != source {
            return None;
        }
        self.color_at_xy(x, y)
    }

    fn apply(&mut self, color: Color) -> Color {
        self.color = color;
        color
    }

    // -------------------------------------------------------------------------
    // Render plan
    // -------------------------------------------------------------------------

    fn ring_spokes(layout: &WheelLayout) -> Vec<DrawCommand> {
        let width = (0.8 * layout.stroke_width) as f32;
        let count = (TAU / CSTEP).ceil() as usize;
        (0..count)
            .map(|i| {
                let a = i as f64 * CSTEP;
                let (r, g, b) = hsv_to_rgb(a / TAU, 1.0, 1.0);
                let (from, to) = layout.hue_line(a / TAU);
                DrawCommand::Line {
                    from: pt(from),
                    to: pt(to),
                    color: RenderColor::rgb(r as f32, g as f32, b as f32),
                    width,
                }
            })
            .collect()
    }

    fn draw_ring(&self, renderer: &mut Renderer, layout: &WheelLayout) {
        let mut cache = self.ring_cache.borrow_mut();
        if cache.as_ref().is_none_or(|c| c.layout != *layout) {
            log::trace!("WheelSelector: rebuilding ring spokes for M={:.1}", layout.size);
            *cache = Some(RingCache {
                layout: *layout,
                commands: Self::ring_spokes(layout),
            });
        }
        if let Some(cache) = cache.as_ref() {
            renderer.extend(cache.commands.iter().cloned());
        }
    }

    fn draw_samples(&self, renderer: &mut Renderer, layout: &WheelLayout) {
        let engine = self.engine();
        let center = pt((layout.center_x, layout.center_y));
        let stroke = layout.stroke_width as f32;

        for sample in engine.ring_samples() {
            let (a1, a2) = sample.wedge_angles();
            renderer.fill_wedge(
                center,
                layout.ring_inner_radius as f32,
                (a1 as f32, a2 as f32),
                sample.rgb().to_render_color(),
                Some((RenderColor::GREY, stroke)),
            );
        }

        for marker in engine.markers() {
            let (cx, cy) = layout.polar(marker.sample.canvas_angle(), layout.marker_radius());
            let color = marker.color.to_render_color();
            match marker.glyph.shape(cx, cy, layout.marker_size()) {
                GlyphShape::Circle { center, radius } => renderer.fill_circle(center, radius, color),
                GlyphShape::Polygon(points) => renderer.fill_polygon(points, color),
            }
        }

        let (from, to) = layout.hue_line(self.color.hsv().h);
        renderer.line(pt(from), pt(to), RenderColor::BLACK, 0.8 * stroke);
        renderer.fill_circle(center, layout.square_radius as f32, RenderColor::GREY);
    }

    fn draw_square(&self, renderer: &mut Renderer, layout: &WheelLayout) {
        let Hsv { h, s, v } = self.color.hsv();
        let half = SQUARE_DRAW_SCALE * layout.square_half_extent;
        let strip = 2.0 * half * CSTEP;
        let count = (1.0 / CSTEP).ceil() as usize;
        let left = layout.center_x - half;
        let top = layout.center_y - half;

        for i in 0..count {
            let row_v = 1.0 - i as f64 * CSTEP;
            let rect = Bounds::new(
                left as f32,
                (top + i as f64 * strip) as f32,
                (2.0 * half) as f32,
                strip as f32,
            );
            renderer.fill_gradient_rect(
                rect,
                Hsv::new(h, 0.0, row_v).to_rgb().to_render_color(),
                Hsv::new(h, 1.0, row_v).to_rgb().to_render_color(),
                GradientDirection::Horizontal,
            );
        }

        let cursor = layout.square_point(s, v, half);
        let cursor_color = Hsv::new(1.0 - h, 1.0 - s, 1.0 - v).to_rgb().to_render_color();
        renderer.stroke_circle(pt(cursor), SQUARE_CURSOR_RADIUS, cursor_color, 1.0);
    }

    fn draw_compare(&self, renderer: &mut Renderer, layout: &WheelLayout) {
        let (center, radius) = layout.compare_indicator();
        let center = pt(center);
        let radius = radius as f32;
        let (up, down) = (-FRAC_PI_2 as f32, FRAC_PI_2 as f32);
        renderer.fill_arc(center, radius, (up, down), self.color.to_render_color());
        renderer.fill_arc(
            center,
            radius,
            (down, (PI + FRAC_PI_2) as f32),
            self.previous.to_render_color(),
        );
        renderer.stroke_circle(
            center,
            radius,
            RenderColor::GREY,
            (0.8 * layout.stroke_width) as f32,
        );
    }
}

impl Widget<SelectorMessage> for WheelSelector {
    fn layout(&mut self, available: Size) -> Size {
        self.refresh_layout();
        let side = available.width.min(available.height);
        Size::new(side, side)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Bounds) {
        let Some(layout) = WheelLayout::compute(
            f64::from(bounds.x),
            f64::from(bounds.y),
            f64::from(bounds.width),
            f64::from(bounds.height),
            self.geometry.margin(),
        ) else {
            return;
        };
        self.draw_ring(renderer, &layout);
        self.draw_samples(renderer, &layout);

        let center = pt((layout.center_x, layout.center_y));
        let stroke = layout.stroke_width as f32;
        for radius in [layout.ring_inner_radius, layout.ring_outer_radius] {
            renderer.stroke_circle(center, radius as f32, RenderColor::GREY, stroke);
        }

        self.draw_square(renderer, &layout);
        self.draw_compare(renderer, &layout);
    }

    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<SelectorMessage> {
        self.set_bounds(bounds);
        self.refresh_layout();

        match self.gesture.update(event) {
            GestureStep::Pressed(position) => {
                self.press_region = self
                    .geometry
                    .classify(f64::from(position.x), f64::from(position.y));
                log::trace!("WheelSelector: press in {:?}", self.press_region);
                None
            }
            GestureStep::Moved {
                press,
                position,
                distance,
            } => match self.press_region {
                Region::SampleBand => {
                    if distance <= self.drag_threshold {
                        return None;
                    }
                    let color = self.color_at(press)?;
                    self.gesture.begin_drag();
                    log::debug!("WheelSelector: dragging sample {:?}", color.rgb());
                    Some(SelectorMessage::DragBegin(DragPayload::new(color.rgb())))
                }
                Region::Ring | Region::Square => {
                    self.gesture.grab();
                    let color = self.drag_color_at(self.press_region, position)?;
                    Some(SelectorMessage::Edited(self.apply(color)))
                }
                Region::None => None,
            },
            GestureStep::Released {
                position,
                select,
                grabbed,
            } => {
                let region = std::mem::replace(&mut self.press_region, Region::None);
                if !select {
                    return None;
                }
                let color = if grabbed {
                    self.drag_color_at(region, position).unwrap_or(self.color)
                } else {
                    self.color_at(position)?
                };
                log::debug!("WheelSelector: selected {:?}", color.rgb());
                Some(SelectorMessage::Committed(self.apply(color)))
            }
            GestureStep::Idle => None,
        }
    }
}

impl ColorSelector for WheelSelector {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn name(&self) -> &'static str {
        "wheel"
    }
}

impl std::fmt::Debug for WheelSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelSelector")
            .field("color", &self.color)
            .field("flags", &self.flags)
            .field("press_region", &self.press_region)
            .finish()
    }
}
