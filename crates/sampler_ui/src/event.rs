use crate::Point;

/// Pointer events that widgets can respond to.
///
/// Positions are in the same coordinate space as the `Bounds` the widget
/// is handed alongside the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Mouse button pressed.
    MousePressed { button: MouseButton, position: Point },
    /// Mouse button released.
    MouseReleased { button: MouseButton, position: Point },
    /// Mouse moved.
    MouseMoved { position: Point },
    /// Pointer left the widget.
    MouseLeft,
}

impl Event {
    /// Position carried by the event, if any.
    pub fn position(&self) -> Option<Point> {
        match self {
            Event::MousePressed { position, .. }
            | Event::MouseReleased { position, .. }
            | Event::MouseMoved { position } => Some(*position),
            Event::MouseLeft => None,
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}
