//! Widget trait and related types

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// The core widget trait that all colour selectors implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Record the widget's draw commands
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds);

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> Option<M> {
        let _ = (event, bounds);
        None
    }
}
