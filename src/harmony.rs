//! Colour harmonies on a 12-step hue ring.
//!
//! The ring holds `SAMPLE_COUNT` hues spaced 30 degrees apart, starting at the base
//! hue. Each harmony marks a fixed subset of ring indices; the union of the marked
//! samples, in ring order and without duplicates, is the current harmony palette.

use std::f64::consts::{PI, TAU};

use sampler_ui::Point;
use serde::{Deserialize, Serialize};

use crate::color_space::{Hsv, Rgb, wrap_hue};
use crate::constants::SAMPLE_COUNT;

/// A classical colour-theory relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Harmony {
    Analogous,
    Complementary,
    SplitComplementary,
    DoubleComplementary,
    Square,
    Triadic,
}

impl Harmony {
    /// All harmonies in the order the toggles are listed.
    pub const ALL: [Harmony; 6] = [
        Harmony::Analogous,
        Harmony::Complementary,
        Harmony::SplitComplementary,
        Harmony::DoubleComplementary,
        Harmony::Square,
        Harmony::Triadic,
    ];

    /// Order in which markers are stacked when several harmonies mark one sample.
    pub const DRAW_ORDER: [Harmony; 6] = [
        Harmony::Triadic,
        Harmony::Complementary,
        Harmony::Square,
        Harmony::DoubleComplementary,
        Harmony::SplitComplementary,
        Harmony::Analogous,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Harmony::Analogous => "Analogous",
            Harmony::Complementary => "Complementary color",
            Harmony::SplitComplementary => "Split complementary",
            Harmony::DoubleComplementary => "Double complementary",
            Harmony::Square => "Square",
            Harmony::Triadic => "Triadic",
        }
    }

    pub fn glyph(self) -> MarkerGlyph {
        match self {
            Harmony::Triadic => MarkerGlyph::TriangleUp,
            Harmony::Complementary => MarkerGlyph::Circle,
            Harmony::Square => MarkerGlyph::Square,
            Harmony::DoubleComplementary => MarkerGlyph::VerticalRect,
            Harmony::SplitComplementary => MarkerGlyph::TriangleDown,
            Harmony::Analogous => MarkerGlyph::Rect,
        }
    }

    /// Whether this harmony marks ring sample `index`.
    ///
    /// The k-fold symmetric harmonies use `index % (12 / k)`. The other three are
    /// fixed offsets on the 12-step wheel and are listed verbatim.
    pub fn marks(self, index: usize) -> bool {
        match self {
            Harmony::Triadic => index % (SAMPLE_COUNT / 3) == 0,
            Harmony::Complementary => index % (SAMPLE_COUNT / 2) == 0,
            Harmony::Square => index % (SAMPLE_COUNT / 4) == 0,
            Harmony::DoubleComplementary => matches!(index, 0 | 2 | 6 | 8),
            Harmony::SplitComplementary => matches!(index, 0 | 5 | 7),
            Harmony::Analogous => index == 0 || index == 1 || index == SAMPLE_COUNT - 1,
        }
    }

    /// Ring indices marked by this harmony, ascending.
    pub fn indices(self) -> Vec<usize> {
        (0..SAMPLE_COUNT).filter(|&i| self.marks(i)).collect()
    }
}

/// Which harmonies are shown on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonyFlags {
    pub complementary: bool,
    pub triadic: bool,
    pub double_complementary: bool,
    pub split_complementary: bool,
    pub analogous: bool,
    pub square: bool,
}

impl HarmonyFlags {
    pub fn none() -> Self {
        Self::default()
    }

    /// Flags with exactly the given harmonies enabled.
    pub fn only(harmonies: &[Harmony]) -> Self {
        let mut flags = Self::none();
        for &harmony in harmonies {
            flags.set(harmony, true);
        }
        flags
    }

    pub fn is_enabled(&self, harmony: Harmony) -> bool {
        match harmony {
            Harmony::Complementary => self.complementary,
            Harmony::Triadic => self.triadic,
            Harmony::DoubleComplementary => self.double_complementary,
            Harmony::SplitComplementary => self.split_complementary,
            Harmony::Analogous => self.analogous,
            Harmony::Square => self.square,
        }
    }

    pub fn set(&mut self, harmony: Harmony, enabled: bool) {
        let slot = match harmony {
            Harmony::Complementary => &mut self.complementary,
            Harmony::Triadic => &mut self.triadic,
            Harmony::DoubleComplementary => &mut self.double_complementary,
            Harmony::SplitComplementary => &mut self.split_complementary,
            Harmony::Analogous => &mut self.analogous,
            Harmony::Square => &mut self.square,
        };
        *slot = enabled;
    }

    /// Flip one harmony, returning its new state.
    pub fn toggle(&mut self, harmony: Harmony) -> bool {
        let enabled = !self.is_enabled(harmony);
        self.set(harmony, enabled);
        enabled
    }

    pub fn any(&self) -> bool {
        Harmony::ALL.iter().any(|&h| self.is_enabled(h))
    }

    /// Enabled harmonies in marker draw order.
    pub fn enabled(&self) -> impl Iterator<Item = Harmony> + '_ {
        Harmony::DRAW_ORDER
            .into_iter()
            .filter(move |&h| self.is_enabled(h))
    }
}

/// Marker shape drawn on a harmonic sample. Purely visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerGlyph {
    TriangleUp,
    TriangleDown,
    Circle,
    Square,
    Rect,
    VerticalRect,
}

/// Outline of a glyph placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum GlyphShape {
    Circle { center: Point, radius: f32 },
    Polygon(Vec<Point>),
}

const SQRT3_2: f64 = 0.866_025_403_784_438_6;
const SQRT3_6: f64 = 0.288_675_134_594_812_9;
const SQRT2_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
const RECT_NARROW: f64 = 0.3;

impl MarkerGlyph {
    /// Canvas outline of this glyph, `size` units across, centred at (`cx`, `cy`).
    pub fn shape(self, cx: f64, cy: f64, size: f64) -> GlyphShape {
        let pt = |dx: f64, dy: f64| Point::new((cx + dx) as f32, (cy + dy) as f32);
        match self {
            MarkerGlyph::Circle => GlyphShape::Circle {
                center: pt(0.0, 0.0),
                radius: (size / 2.0) as f32,
            },
            MarkerGlyph::TriangleUp => GlyphShape::Polygon(vec![
                pt(0.0, -size * SQRT3_2),
                pt(0.5 * size, size * SQRT3_6),
                pt(-0.5 * size, size * SQRT3_6),
            ]),
            MarkerGlyph::TriangleDown => GlyphShape::Polygon(vec![
                pt(0.0, size * SQRT3_2),
                pt(0.5 * size, -size * SQRT3_6),
                pt(-0.5 * size, -size * SQRT3_6),
            ]),
            MarkerGlyph::Square => rect_shape(pt, size * SQRT2_2, size * SQRT2_2),
            MarkerGlyph::Rect => rect_shape(pt, size * SQRT2_2, size * RECT_NARROW),
            MarkerGlyph::VerticalRect => rect_shape(pt, size * RECT_NARROW, size * SQRT2_2),
        }
    }
}

fn rect_shape(pt: impl Fn(f64, f64) -> Point, half_w: f64, half_h: f64) -> GlyphShape {
    GlyphShape::Polygon(vec![
        pt(half_w, half_h),
        pt(half_w, -half_h),
        pt(-half_w, -half_h),
        pt(-half_w, half_h),
    ])
}

/// One of the 12 discrete hues on the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSample {
    pub index: usize,
    pub hsv: Hsv,
}

impl RingSample {
    pub fn rgb(&self) -> Rgb {
        self.hsv.to_rgb()
    }

    /// Canvas angle of the wedge centre (y-down, so hue increases counter-clockwise).
    pub fn canvas_angle(&self) -> f64 {
        -self.hsv.h * TAU
    }

    /// Canvas start/end angles of this sample's wedge.
    pub fn wedge_angles(&self) -> (f64, f64) {
        let half = PI / SAMPLE_COUNT as f64;
        let center = self.canvas_angle();
        (center - half, center + half)
    }

    /// Pointer angle (in [0, 2pi)) at the middle of this wedge, in the convention
    /// used by hit testing: `pi + atan2(y - y0, x0 - x)`.
    pub fn pointer_angle(&self) -> f64 {
        self.hsv.h * TAU
    }
}

/// A harmony marker: which sample it sits on and how it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonyMarker {
    pub harmony: Harmony,
    pub glyph: MarkerGlyph,
    pub sample: RingSample,
    /// Marker colour, the inverse of the sample colour
    pub color: Rgb,
}

/// One entry of the harmony palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonySample {
    pub index: usize,
    pub hsv: Hsv,
}

/// The current harmony palette: marked samples in ring order, deduplicated by value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HarmonySet {
    entries: Vec<HarmonySample>,
}

impl HarmonySet {
    /// Append unless an entry with the same colour is already present.
    fn try_put(&mut self, sample: HarmonySample) {
        if !self.entries.iter().any(|e| e.hsv == sample.hsv) {
            self.entries.push(sample);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HarmonySample> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[HarmonySample] {
        &self.entries
    }

    pub fn indices(&self) -> Vec<usize> {
        self.entries.iter().map(|e| e.index).collect()
    }

    pub fn colors(&self) -> Vec<Hsv> {
        self.entries.iter().map(|e| e.hsv).collect()
    }
}

impl<'a> IntoIterator for &'a HarmonySet {
    type Item = &'a HarmonySample;
    type IntoIter = std::slice::Iter<'a, HarmonySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Pure harmony computation for one base colour and flag set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonyEngine {
    base: Hsv,
    flags: HarmonyFlags,
}

impl HarmonyEngine {
    pub fn new(base: Hsv, flags: HarmonyFlags) -> Self {
        Self { base, flags }
    }

    pub fn base(&self) -> Hsv {
        self.base
    }

    pub fn flags(&self) -> HarmonyFlags {
        self.flags
    }

    /// Ring sample `index` (taken modulo the ring size): hue `(h + i/12) mod 1`,
    /// saturation and value of the base colour.
    pub fn sample(&self, index: usize) -> RingSample {
        let index = index % SAMPLE_COUNT;
        let hue = wrap_hue(self.base.h + index as f64 / SAMPLE_COUNT as f64);
        RingSample {
            index,
            hsv: self.base.with_hue(hue),
        }
    }

    pub fn ring_samples(&self) -> [RingSample; SAMPLE_COUNT] {
        std::array::from_fn(|i| self.sample(i))
    }

    /// Markers to draw, grouped per sample in ring order, stacked in draw order.
    pub fn markers(&self) -> Vec<HarmonyMarker> {
        let mut markers = Vec::new();
        for index in 0..SAMPLE_COUNT {
            let sample = self.sample(index);
            for harmony in self.flags.enabled().filter(|h| h.marks(index)) {
                markers.push(HarmonyMarker {
                    harmony,
                    glyph: harmony.glyph(),
                    sample,
                    color: sample.rgb().inverted(),
                });
            }
        }
        markers
    }

    /// The harmony palette: every marked sample once, in ring order.
    pub fn samples(&self) -> HarmonySet {
        let mut set = HarmonySet::default();
        for index in 0..SAMPLE_COUNT {
            if self.flags.enabled().any(|h| h.marks(index)) {
                let sample = self.sample(index);
                set.try_put(HarmonySample {
                    index,
                    hsv: sample.hsv,
                });
            }
        }
        set
    }
}
