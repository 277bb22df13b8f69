//! The complete colour sampler panel.
//!
//! Top to bottom: the hue wheel, the recent-colours tray, and one channel group
//! (RGB or HSV, like notebook tabs). The host feeds pointer events and drops in,
//! and receives draw commands, drag payloads and committed colours back.

use std::cell::RefCell;
use std::rc::Rc;

use sampler_ui::{
    Bounds, DrawCommand, Event, MouseButton, ObserverId, ObserverList, Renderer, Size, Widget,
};

use crate::color_space::{Color, Rgb};
use crate::config::SamplerConfig;
use crate::constants::{CHANNEL_ROW_HEIGHT, PADDING, RECENT_SLOT_SIZE};
use crate::coordinator::{SelectorCoordinator, SelectorId};
use crate::dnd::{ColorPayload, DragPayload, DropError};
use crate::harmony::{Harmony, HarmonyFlags, HarmonySet};
use crate::history::RecentColorsHistory;
use crate::model::ColorModel;
use crate::selectors::{
    ChannelGroup, ChannelGroupKind, RecentColorsTray, SelectorMessage, WheelSelector,
};

/// The panel's child areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPart {
    Wheel,
    Recent,
    Details,
}

/// Where each part is drawn, in panel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelLayout {
    pub wheel: Bounds,
    pub recent: Bounds,
    pub details: Bounds,
}

impl PanelLayout {
    pub fn compute(width: f32, height: f32) -> Self {
        let details_height = 3.0 * CHANNEL_ROW_HEIGHT;
        let wheel_height = (height - RECENT_SLOT_SIZE - details_height - 2.0 * PADDING).max(0.0);
        let recent_y = wheel_height + PADDING;
        let details_y = recent_y + RECENT_SLOT_SIZE + PADDING;
        Self {
            wheel: Bounds::new(0.0, 0.0, width, wheel_height),
            recent: Bounds::new(0.0, recent_y, width, RECENT_SLOT_SIZE),
            details: Bounds::new(0.0, details_y, width, details_height),
        }
    }

    pub fn part_at(&self, x: f32, y: f32) -> Option<PanelPart> {
        if self.wheel.contains(x, y) {
            Some(PanelPart::Wheel)
        } else if self.recent.contains(x, y) {
            Some(PanelPart::Recent)
        } else if self.details.contains(x, y) {
            Some(PanelPart::Details)
        } else {
            None
        }
    }
}

pub struct ColorSamplerPanel {
    coordinator: SelectorCoordinator,
    history: Rc<RefCell<RecentColorsHistory>>,
    history_observer: ObserverId,

    wheel: Rc<RefCell<WheelSelector>>,
    rgb: Rc<RefCell<ChannelGroup>>,
    hsv: Rc<RefCell<ChannelGroup>>,
    recent: Rc<RefCell<RecentColorsTray>>,
    wheel_id: SelectorId,
    rgb_id: SelectorId,
    hsv_id: SelectorId,
    recent_id: SelectorId,

    details: ChannelGroupKind,
    layout: PanelLayout,
    /// Part that received the last press; it keeps events until release.
    pointer_owner: Option<PanelPart>,
    on_color_selected: ObserverList<Rgb>,
}

impl ColorSamplerPanel {
    /// Build a panel with default settings around a host-owned history.
    pub fn new(history: Rc<RefCell<RecentColorsHistory>>) -> Self {
        Self::from_config(&SamplerConfig::default(), history)
    }

    pub fn from_config(config: &SamplerConfig, history: Rc<RefCell<RecentColorsHistory>>) -> Self {
        let initial = Color::default();
        let threshold = config.wheel.drag_threshold as f32;

        let wheel = Rc::new(RefCell::new(
            WheelSelector::new(initial)
                .margin(config.wheel.margin)
                .drag_threshold(threshold)
                .harmonies(config.harmonies),
        ));
        let rgb = Rc::new(RefCell::new(ChannelGroup::rgb(initial)));
        let hsv = Rc::new(RefCell::new(ChannelGroup::hsv(initial)));
        let recent = Rc::new(RefCell::new(
            RecentColorsTray::for_history(&history.borrow()).drag_threshold(threshold),
        ));
        let history_observer = RecentColorsTray::attach(&recent, &mut history.borrow_mut());

        let mut coordinator = SelectorCoordinator::new(ColorModel::new(initial));
        let wheel_id = coordinator.register(wheel.clone());
        let rgb_id = coordinator.register(rgb.clone());
        let hsv_id = coordinator.register(hsv.clone());
        let recent_id = coordinator.register(recent.clone());

        Self {
            coordinator,
            history,
            history_observer,
            wheel,
            rgb,
            hsv,
            recent,
            wheel_id,
            rgb_id,
            hsv_id,
            recent_id,
            details: ChannelGroupKind::Rgb,
            layout: PanelLayout::default(),
            pointer_owner: None,
            on_color_selected: ObserverList::new(),
        }
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn color(&self) -> Color {
        self.coordinator.current()
    }

    pub fn previous_color(&self) -> Color {
        self.coordinator.model().previous()
    }

    pub fn layout(&self) -> PanelLayout {
        self.layout
    }

    pub fn history(&self) -> Rc<RefCell<RecentColorsHistory>> {
        Rc::clone(&self.history)
    }

    pub fn harmonies(&self) -> HarmonyFlags {
        self.wheel.borrow().flags()
    }

    /// The harmony palette for the current colour.
    pub fn harmony_palette(&self) -> HarmonySet {
        self.wheel.borrow().harmony_samples()
    }

    pub fn details(&self) -> ChannelGroupKind {
        self.details
    }

    /// Switch the visible channel group.
    pub fn show_details(&mut self, kind: ChannelGroupKind) {
        self.details = kind;
    }

    pub fn spin_values(&self, kind: ChannelGroupKind) -> [u32; 3] {
        self.group(kind).borrow().spin_values()
    }

    pub fn recent_slots(&self) -> Vec<Option<Rgb>> {
        self.recent.borrow().slots().to_vec()
    }

    fn group(&self, kind: ChannelGroupKind) -> &Rc<RefCell<ChannelGroup>> {
        match kind {
            ChannelGroupKind::Rgb => &self.rgb,
            ChannelGroupKind::Hsv => &self.hsv,
        }
    }

    fn group_id(&self, kind: ChannelGroupKind) -> SelectorId {
        match kind {
            ChannelGroupKind::Rgb => self.rgb_id,
            ChannelGroupKind::Hsv => self.hsv_id,
        }
    }

    // -------------------------------------------------------------------------
    // Host callbacks
    // -------------------------------------------------------------------------

    /// Register a host observer called once per committed selection.
    pub fn on_color_selected<F>(&mut self, f: F) -> ObserverId
    where
        F: Fn(&Rgb) + 'static,
    {
        self.on_color_selected.subscribe(f)
    }

    pub fn remove_color_selected_observer(&mut self, id: ObserverId) -> bool {
        self.on_color_selected.unsubscribe(id)
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Lay the panel out for a new size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.layout = PanelLayout::compute(width, height);
        let mut wheel = self.wheel.borrow_mut();
        wheel.set_bounds(self.layout.wheel);
        wheel.layout(self.layout.wheel.size());
        log::debug!("ColorSamplerPanel: resized to {width}x{height}");
    }

    /// Route a pointer event. Returns a payload when a drag-and-drop starts.
    pub fn on_event(&mut self, event: &Event) -> Option<DragPayload> {
        if let Event::MousePressed {
            button: MouseButton::Left,
            position,
        } = event
        {
            self.pointer_owner = self.layout.part_at(position.x, position.y);
        }
        let part = self.pointer_owner?;
        let message = match part {
            PanelPart::Wheel => self.wheel.borrow_mut().on_event(event, self.layout.wheel),
            PanelPart::Recent => self.recent.borrow_mut().on_event(event, self.layout.recent),
            PanelPart::Details => self
                .group(self.details)
                .borrow_mut()
                .on_event(event, self.layout.details),
        };
        if matches!(
            event,
            Event::MouseReleased {
                button: MouseButton::Left,
                ..
            }
        ) {
            self.pointer_owner = None;
        }
        message.and_then(|message| self.handle_selector_message(part, message))
    }

    /// The user typed a value into a channel group's numeric field.
    pub fn set_spin(&mut self, kind: ChannelGroupKind, index: usize, value: u32) {
        let message = self.group(kind).borrow_mut().set_spin(index, value);
        if let Some(SelectorMessage::Committed(color)) = message {
            let source = self.group_id(kind);
            self.user_edit(source, color);
            self.commit(color);
        }
    }

    /// Flip one harmony. Returns its new state.
    pub fn toggle_harmony(&mut self, harmony: Harmony) -> bool {
        let enabled = self.wheel.borrow_mut().toggle_harmony(harmony);
        log::debug!("ColorSamplerPanel: {} {}", harmony.label(), if enabled { "on" } else { "off" });
        enabled
    }

    /// Accept a drop. A rejected drop leaves the colour untouched.
    pub fn drop_data(&mut self, mime: &str, bytes: &[u8]) -> Result<Color, DropError> {
        let payload = ColorPayload::from_drop(mime, bytes).inspect_err(|e| {
            log::warn!("ColorSamplerPanel: drop rejected: {e}");
        })?;
        let color = self.color().with_rgb(payload.to_rgb());
        log::debug!("ColorSamplerPanel: dropped {:?}", color.rgb());
        self.external_push(color);
        self.on_color_selected.notify(&color.rgb());
        Ok(color)
    }

    /// The host's brush colour changed. Updates every selector without
    /// reporting the colour back to the host.
    pub fn set_brush_color(&mut self, rgb: Rgb) {
        let color = self.color().with_rgb(rgb);
        self.external_push(color);
    }

    fn handle_selector_message(
        &mut self,
        part: PanelPart,
        message: SelectorMessage,
    ) -> Option<DragPayload> {
        let source = match part {
            PanelPart::Wheel => self.wheel_id,
            PanelPart::Recent => self.recent_id,
            PanelPart::Details => self.group_id(self.details),
        };
        match message {
            SelectorMessage::Edited(color) => {
                self.coordinator.user_previewed(source, color);
                self.sync_previous();
                None
            }
            SelectorMessage::Committed(color) => {
                self.user_edit(source, color);
                self.commit(color);
                None
            }
            SelectorMessage::DragBegin(payload) => {
                log::debug!("ColorSamplerPanel: drag started from {part:?}");
                Some(payload)
            }
        }
    }

    fn user_edit(&mut self, source: SelectorId, color: Color) {
        self.coordinator.user_edited(source, color);
        self.sync_previous();
    }

    fn external_push(&mut self, color: Color) {
        self.coordinator.external_color_push(color);
        self.sync_previous();
    }

    fn sync_previous(&mut self) {
        let previous = self.coordinator.model().previous();
        self.wheel.borrow_mut().set_previous(previous);
    }

    fn commit(&mut self, color: Color) {
        let rgb = color.rgb();
        log::debug!("ColorSamplerPanel: committed {rgb:?}");
        self.on_color_selected.notify(&rgb);
        self.history.borrow_mut().push(rgb);
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// Draw commands for the whole panel.
    pub fn render(&self) -> Vec<DrawCommand> {
        let mut renderer = Renderer::new();
        self.wheel.borrow().draw(&mut renderer, self.layout.wheel);
        self.recent.borrow().draw(&mut renderer, self.layout.recent);
        self.group(self.details)
            .borrow()
            .draw(&mut renderer, self.layout.details);
        renderer.take_commands()
    }

    /// Preferred size of the whole panel for a given width.
    pub fn preferred_size(&mut self, width: f32) -> Size {
        let wheel = self.wheel.borrow_mut().layout(Size::new(width, width));
        Size::new(
            width,
            wheel.height + RECENT_SLOT_SIZE + 3.0 * CHANNEL_ROW_HEIGHT + 2.0 * PADDING,
        )
    }
}

impl Drop for ColorSamplerPanel {
    fn drop(&mut self) {
        self.history
            .borrow_mut()
            .unsubscribe(self.history_observer);
    }
}

impl std::fmt::Debug for ColorSamplerPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorSamplerPanel")
            .field("coordinator", &self.coordinator)
            .field("details", &self.details)
            .field("layout", &self.layout)
            .finish()
    }
}
