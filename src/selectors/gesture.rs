//! Press / move / release bookkeeping shared by every selector.
//!
//! A press arms selection. Motion while pressed is reported to the selector,
//! which either starts a drag-and-drop (disarming selection for the rest of the
//! gesture) or grabs the pointer and edits live. Release reports whether
//! selection is still armed.

use sampler_ui::{Event, MouseButton, Point};

/// What a pointer event means for the selector receiving it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureStep {
    /// Nothing to do
    Idle,
    /// Button went down at this point
    Pressed(Point),
    /// Pointer moved while the button is held
    Moved {
        press: Point,
        position: Point,
        /// Distance travelled from the press point
        distance: f32,
    },
    /// Button released. `select` is false once a drag has started.
    Released {
        position: Point,
        select: bool,
        grabbed: bool,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PointerGesture {
    press: Option<Point>,
    do_select: bool,
    grabbed: bool,
}

impl PointerGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one event. Only the left button takes part in gestures.
    pub fn update(&mut self, event: &Event) -> GestureStep {
        match *event {
            Event::MousePressed {
                button: MouseButton::Left,
                position,
            } => {
                self.press = Some(position);
                self.do_select = true;
                self.grabbed = false;
                GestureStep::Pressed(position)
            }
            Event::MouseMoved { position } => match self.press {
                Some(press) if self.do_select => GestureStep::Moved {
                    press,
                    position,
                    distance: press.distance(position),
                },
                _ => GestureStep::Idle,
            },
            Event::MouseReleased {
                button: MouseButton::Left,
                position,
            } => {
                let step = if self.press.is_some() {
                    GestureStep::Released {
                        position,
                        select: self.do_select,
                        grabbed: self.grabbed,
                    }
                } else {
                    GestureStep::Idle
                };
                *self = Self::default();
                step
            }
            _ => GestureStep::Idle,
        }
    }

    /// The selector started a drag-and-drop: nothing is selected on release.
    pub fn begin_drag(&mut self) {
        self.do_select = false;
    }

    /// The selector is editing live; keep the pointer until release.
    pub fn grab(&mut self) {
        self.grabbed = true;
    }

    /// Forget the current gesture, e.g. when the host cancels the grab.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    pub fn press_point(&self) -> Option<Point> {
        self.press
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    pub fn is_dragging(&self) -> bool {
        self.press.is_some() && !self.do_select
    }
}
