//! sampler_ui - the widget seam between the colour sampler and its host toolkit
//!
//! This crate does not open windows or touch the GPU. It defines the pointer events
//! a host delivers, the geometry types widgets lay out with, a recorded draw list the
//! host rasterizes, and the observer lists models use to announce changes.

mod event;
mod layout;
mod observer;
mod renderer;
mod widget;

pub use event::{Event, MouseButton};
pub use layout::{Bounds, Point, Size};
pub use observer::{ObserverId, ObserverList};
pub use renderer::{Color, DrawCommand, GradientDirection, Renderer};
pub use widget::Widget;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::event::{Event, MouseButton};
    pub use crate::layout::{Bounds, Point, Size};
    pub use crate::observer::{ObserverId, ObserverList};
    pub use crate::renderer::{Color, DrawCommand, GradientDirection, Renderer};
    pub use crate::widget::Widget;
}
