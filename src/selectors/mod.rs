//! Interactive colour selectors.
//!
//! Every selector is a `Widget<SelectorMessage>` and a `ColorSelector`: it reports
//! user edits as messages and shows colours pushed to it by the coordinator.

mod channel;
mod channel_group;
mod gesture;
mod recent;
mod wheel;

pub use channel::{Channel, LinearChannelSelector};
pub use channel_group::{ChannelGroup, ChannelGroupKind};
pub use gesture::{GestureStep, PointerGesture};
pub use recent::RecentColorsTray;
pub use wheel::WheelSelector;

use crate::color_space::Color;
use crate::dnd::DragPayload;

/// Messages selectors send to the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorMessage {
    /// The colour changed while the pointer is still held
    Edited(Color),
    /// The user finished picking this colour
    Committed(Color),
    /// A drag-and-drop started carrying this payload
    DragBegin(DragPayload),
}

impl SelectorMessage {
    /// The colour this message sets, if any.
    pub fn color(&self) -> Option<Color> {
        match self {
            SelectorMessage::Edited(color) | SelectorMessage::Committed(color) => Some(*color),
            SelectorMessage::DragBegin(_) => None,
        }
    }
}
