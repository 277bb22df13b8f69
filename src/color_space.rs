//! RGB <-> HSV conversion and the colour value type shared by every selector.
//!
//! All channels are normalized to 0.0-1.0. Hue is a fraction of a full turn and
//! wraps modulo 1.

use sampler_ui::Color as RenderColor;
use serde::{Deserialize, Serialize};

/// An RGB triple. Not clamped: producers are responsible for staying in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Complementary colour used for markers drawn on top of a swatch.
    pub fn inverted(self) -> Rgb {
        Rgb::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b)
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_render_color(self) -> RenderColor {
        RenderColor::rgb(self.r as f32, self.g as f32, self.b as f32)
    }
}

/// An HSV triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn with_hue(self, h: f64) -> Hsv {
        Hsv { h, ..self }
    }

    pub fn with_saturation(self, s: f64) -> Hsv {
        Hsv { s, ..self }
    }

    pub fn with_value(self, v: f64) -> Hsv {
        Hsv { v, ..self }
    }

    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = hsv_to_rgb(self.h, self.s, self.v);
        Rgb::new(r, g, b)
    }
}

/// Convert RGB to HSV.
///
/// Returns `None` for the hue when the colour is achromatic (`max == min`), since
/// any hue describes it equally well. Callers holding a previous hue should keep it.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (Option<f64>, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    if delta == 0.0 {
        return (None, s, v);
    }

    let rc = (max - r) / delta;
    let gc = (max - g) / delta;
    let bc = (max - b) / delta;
    let sector = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    (Some((sector / 6.0).rem_euclid(1.0)), s, v)
}

/// Convert HSV to RGB.
///
/// Hue is taken modulo 1 first, so any real hue is accepted. The six sectors are
/// `floor(h * 6) mod 6`; the piecewise-linear ramps match the classic algorithm.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = wrap_hue(h) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Wrap a hue into [0, 1).
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// The colour every selector exchanges: RGB plus its HSV decomposition.
///
/// The HSV half is carried along rather than recomputed so that a hue survives
/// trips through achromatic colours (grey, black, white).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    rgb: Rgb,
    hsv: Hsv,
}

impl Color {
    /// Build from RGB. An achromatic colour gets hue 0.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::from_rgb_preserving_hue(rgb, 0.0)
    }

    /// Build from RGB, keeping `previous_hue` when the colour is achromatic.
    pub fn from_rgb_preserving_hue(rgb: Rgb, previous_hue: f64) -> Self {
        let (h, s, v) = rgb_to_hsv(rgb.r, rgb.g, rgb.b);
        Self {
            rgb,
            hsv: Hsv::new(h.unwrap_or(previous_hue), s, v),
        }
    }

    /// Build from HSV; the HSV triple is stored exactly as given.
    pub fn from_hsv(hsv: Hsv) -> Self {
        Self {
            rgb: hsv.to_rgb(),
            hsv,
        }
    }

    /// Replace the RGB value, keeping this colour's hue if the new one has none.
    pub fn with_rgb(&self, rgb: Rgb) -> Self {
        Self::from_rgb_preserving_hue(rgb, self.hsv.h)
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn to_render_color(&self) -> RenderColor {
        self.rgb.to_render_color()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgb(Rgb::RED)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        Self::from_hsv(hsv)
    }
}
