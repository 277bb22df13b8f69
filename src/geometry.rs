//! Hue wheel geometry: layout constants and pointer classification.
//!
//! The wheel is an outer hue ring, an inner band of 12 sample wedges, and a
//! saturation/value square in the middle. Every radius is a fixed fraction of
//! `M = min(width, height) - margin`.

use std::f64::consts::{PI, SQRT_2, TAU};

use crate::constants::{
    MARKER_SIZE_DIVISOR, RING_DRAG_INSET, RING_INNER_RADIUS_RATIO, SAMPLE_COUNT,
    SQUARE_DRAG_INSET, SQUARE_RADIUS_RATIO, STROKE_WIDTH_RATIO,
};
use crate::harmony::RingSample;

/// Interactive area a point falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Hue ring
    Ring,
    /// Band of precomputed harmonic samples between the square and the ring
    SampleBand,
    /// Saturation/value square
    Square,
    /// Outside every interactive area
    None,
}

/// Derived wheel dimensions for one widget size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelLayout {
    pub center_x: f64,
    pub center_y: f64,
    /// Shorter widget side minus the margin
    pub size: f64,
    pub square_radius: f64,
    pub ring_inner_radius: f64,
    pub ring_outer_radius: f64,
    pub square_half_extent: f64,
    pub stroke_width: f64,
    /// Shorter widget side, used for marker sizing
    pub min_side: f64,
}

impl WheelLayout {
    /// Compute the layout for a widget at (`x`, `y`) of the given size.
    ///
    /// Returns `None` for an empty or negative size.
    pub fn compute(x: f64, y: f64, width: f64, height: f64, margin: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let min_side = width.min(height);
        let size = min_side - margin;
        let square_radius = SQUARE_RADIUS_RATIO * size;
        Some(Self {
            center_x: x + width / 2.0,
            center_y: y + height / 2.0,
            size,
            square_radius,
            ring_inner_radius: RING_INNER_RADIUS_RATIO * size,
            ring_outer_radius: size / 2.0,
            square_half_extent: square_radius / SQRT_2,
            stroke_width: STROKE_WIDTH_RATIO * size,
            min_side,
        })
    }

    /// Radius at which harmony markers sit, midway through the sample band.
    pub fn marker_radius(&self) -> f64 {
        (self.ring_inner_radius + self.square_radius) / 2.0
    }

    /// Edge length of a harmony marker.
    pub fn marker_size(&self) -> f64 {
        self.min_side / MARKER_SIZE_DIVISOR
    }

    /// Point at `radius` from the centre along canvas angle `angle`.
    pub fn polar(&self, angle: f64, radius: f64) -> (f64, f64) {
        (
            self.center_x + radius * angle.cos(),
            self.center_y + radius * angle.sin(),
        )
    }

    /// Ring spoke for hue `h`: from the inner to the outer ring radius.
    pub fn hue_line(&self, h: f64) -> ((f64, f64), (f64, f64)) {
        let angle = -h * TAU;
        (
            self.polar(angle, self.ring_inner_radius),
            self.polar(angle, self.ring_outer_radius),
        )
    }

    /// Canvas position of the (s, v) cursor inside a square of half extent `half`.
    pub fn square_point(&self, s: f64, v: f64, half: f64) -> (f64, f64) {
        (
            self.center_x - half + s * 2.0 * half,
            self.center_y - half + (1.0 - v) * 2.0 * half,
        )
    }

    /// Centre and radius of the current/previous colour half-disc pair
    /// tucked into the bottom-right corner.
    pub fn compare_indicator(&self) -> ((f64, f64), f64) {
        let half = self.size / 2.0;
        let r = (SQRT_2 - 1.0) * half / (2.0 * SQRT_2);
        (
            (self.center_x + half - r, self.center_y + half - r),
            0.9 * r,
        )
    }
}

/// Owns the wheel's layout and answers hit-testing questions against it.
#[derive(Debug, Clone)]
pub struct WheelGeometry {
    margin: f64,
    bounds: (f64, f64, f64, f64),
    layout: WheelLayout,
    stale: bool,
}

impl WheelGeometry {
    pub fn new(margin: f64) -> Self {
        Self {
            margin,
            bounds: (0.0, 0.0, 0.0, 0.0),
            layout: WheelLayout::default(),
            stale: false,
        }
    }

    /// Recompute the layout for a new widget size.
    ///
    /// A zero or negative size is ignored and the previous layout kept.
    /// Returns true when the layout actually changed.
    pub fn recompute(&mut self, x: f64, y: f64, width: f64, height: f64) -> bool {
        let Some(layout) = WheelLayout::compute(x, y, width, height, self.margin) else {
            log::trace!("WheelGeometry: ignoring degenerate size {width}x{height}");
            return false;
        };
        self.bounds = (x, y, width, height);
        self.stale = false;
        if layout == self.layout {
            return false;
        }
        log::debug!(
            "WheelGeometry: layout {width}x{height} -> M={:.1}, ring {:.1}..{:.1}",
            layout.size,
            layout.ring_inner_radius,
            layout.ring_outer_radius
        );
        self.layout = layout;
        true
    }

    /// Record a new widget size without recomputing; the layout is refreshed by
    /// the next [`ensure_layout`](Self::ensure_layout).
    pub fn resize(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        if (x, y, width, height) != self.bounds {
            self.bounds = (x, y, width, height);
            self.stale = true;
        }
    }

    /// Recompute if a resize is pending. Returns true when the layout changed.
    pub fn ensure_layout(&mut self) -> bool {
        if !self.stale {
            return false;
        }
        let (x, y, width, height) = self.bounds;
        self.recompute(x, y, width, height)
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    fn offset(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.layout.center_x, y - self.layout.center_y)
    }

    /// Classify a point. Comparisons are strict: points exactly on a boundary
    /// circle, or on the square's edge, are `Region::None`.
    pub fn classify(&self, x: f64, y: f64) -> Region {
        let l = &self.layout;
        let (dx, dy) = self.offset(x, y);
        let d = dx.hypot(dy);
        if l.ring_inner_radius < d && d < l.ring_outer_radius {
            Region::Ring
        } else if l.square_radius < d && d < l.ring_inner_radius {
            Region::SampleBand
        } else if dx.abs() < l.square_half_extent && dy.abs() < l.square_half_extent {
            Region::Square
        } else {
            Region::None
        }
    }

    /// Hue under the pointer, in [0, 1].
    ///
    /// The x axis is mirrored so that hue grows counter-clockwise on screen,
    /// matching the order the ring is drawn in.
    pub fn point_to_hue(&self, x: f64, y: f64) -> f64 {
        let l = &self.layout;
        0.5 + 0.5 * (y - l.center_y).atan2(l.center_x - x) / PI
    }

    /// Saturation and value under the pointer. Not clamped.
    pub fn point_to_square(&self, x: f64, y: f64) -> (f64, f64) {
        let l = &self.layout;
        let half = l.square_half_extent;
        let s = (x - l.center_x + half) / (2.0 * half);
        let v = 1.0 - (y - l.center_y + half) / (2.0 * half);
        (s, v)
    }

    /// Position in `samples` of the wedge under the pointer.
    ///
    /// Each wedge spans 360/12 degrees around its sample's angle. The test wraps
    /// around the 0/2pi seam; a point exactly between two wedges matches neither.
    pub fn sample_band_index(&self, x: f64, y: f64, samples: &[RingSample]) -> Option<usize> {
        let l = &self.layout;
        let angle = PI + (y - l.center_y).atan2(l.center_x - x);
        wedge_at_angle(angle, samples)
    }

    /// Where a drag that started in `source` should act when the pointer is at
    /// (`x`, `y`).
    ///
    /// Inside the source region the point is used as is. Outside it, a ring drag
    /// is pinned just inside the ring along the pointer direction, and a square
    /// drag is pinned to the square's edge. Drags from any other region act nowhere.
    pub fn nearest_draggable(&self, source: Region, x: f64, y: f64) -> Option<(f64, f64)> {
        if !matches!(source, Region::Ring | Region::Square) {
            return None;
        }
        if self.classify(x, y) == source {
            return Some((x, y));
        }
        let l = &self.layout;
        let (dx, dy) = self.offset(x, y);
        let d = dx.hypot(dy);
        if d == 0.0 {
            return Some((l.center_x, l.center_y));
        }
        let (ux, uy) = (dx / d, dy / d);
        match source {
            Region::Ring => {
                let r = l.ring_inner_radius + RING_DRAG_INSET;
                Some((l.center_x + r * ux, l.center_y + r * uy))
            }
            _ => {
                let limit = (l.square_half_extent - SQUARE_DRAG_INSET).max(0.0);
                Some((
                    l.center_x + (l.square_radius * ux).clamp(-limit, limit),
                    l.center_y + (l.square_radius * uy).clamp(-limit, limit),
                ))
            }
        }
    }
}

/// Position in `samples` of the wedge containing pointer angle `angle`.
fn wedge_at_angle(angle: f64, samples: &[RingSample]) -> Option<usize> {
    let half_wedge = PI / SAMPLE_COUNT as f64;
    samples.iter().position(|sample| {
        let delta = (angle - sample.pointer_angle() + PI).rem_euclid(TAU) - PI;
        delta.abs() < half_wedge
    })
}
