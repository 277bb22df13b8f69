//! Centralized constants for the colour sampler.
//!
//! Wheel proportions are fractions of `M = min(width, height) - margin`.

// =============================================================================
// Wheel geometry
// =============================================================================

/// Radius of the circle that encloses the saturation/value square
pub const SQUARE_RADIUS_RATIO: f64 = 0.31;

/// Inner radius of the hue ring
pub const RING_INNER_RADIUS_RATIO: f64 = 0.42;

/// Outline stroke width
pub const STROKE_WIDTH_RATIO: f64 = 0.015;

/// Default margin subtracted from the shorter widget side
pub const DEFAULT_WHEEL_MARGIN: f64 = 2.0;

/// How far inside the ring a dragged hue pointer is pinned
pub const RING_DRAG_INSET: f64 = 3.0;

/// How far inside the square edge a dragged saturation/value pointer is pinned
pub const SQUARE_DRAG_INSET: f64 = 1.0;

/// The visible square is drawn slightly smaller than its hit area
pub const SQUARE_DRAW_SCALE: f64 = 0.92;

/// Radius of the saturation/value cursor circle
pub const SQUARE_CURSOR_RADIUS: f32 = 3.0;

/// Angular/linear step used for ring spokes, square strips and hue strips
pub const CSTEP: f64 = 0.007;

// =============================================================================
// Harmonies
// =============================================================================

/// Number of discrete hue samples around the ring
pub const SAMPLE_COUNT: usize = 12;

/// Harmony marker size is `min(width, height) / MARKER_SIZE_DIVISOR`
pub const MARKER_SIZE_DIVISOR: f64 = 27.0;

// =============================================================================
// Interaction
// =============================================================================

/// Pointer travel (in widget units) before a press turns into a drag-and-drop
pub const DEFAULT_DRAG_THRESHOLD: f64 = 20.0;

/// Inset used by swatch-style selectors
pub const PADDING: f32 = 4.0;

// =============================================================================
// Channel selectors
// =============================================================================

/// Preferred height of one channel slider row
pub const CHANNEL_ROW_HEIGHT: f32 = 16.0;

/// Spin ranges shown next to each channel slider
pub const RGB_SPIN_MAX: u32 = 255;
pub const HUE_SPIN_MAX: u32 = 359;
pub const PERCENT_SPIN_MAX: u32 = 100;

// =============================================================================
// Recent colours
// =============================================================================

/// Default number of remembered colours
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Preferred edge length of a recent-colour slot
pub const RECENT_SLOT_SIZE: f32 = 32.0;
