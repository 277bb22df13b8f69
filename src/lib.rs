//! hue_sampler - a colour sampler panel core
//!
//! A hue wheel with harmony samples, RGB/HSV channel sliders and a recent-colours
//! tray, all kept in sync around one shared colour model. Selected colours can be
//! dragged out and dropped back in as 8-byte `application/x-color` payloads.
//!
//! The crate draws through `sampler_ui`'s recorded command list and takes
//! toolkit-neutral pointer events, so any host can embed it.

pub mod color_space;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod dnd;
pub mod geometry;
pub mod harmony;
pub mod history;
pub mod model;
pub mod panel;
pub mod selectors;

pub use color_space::{Color, Hsv, Rgb};
pub use config::{ConfigError, LogLevel, SamplerConfig};
pub use coordinator::{ColorSelector, SelectorCoordinator, SelectorId};
pub use dnd::{COLOR_MIME_TYPE, ColorPayload, DragPayload, DropError};
pub use geometry::{Region, WheelGeometry, WheelLayout};
pub use harmony::{Harmony, HarmonyEngine, HarmonyFlags, HarmonySet};
pub use history::RecentColorsHistory;
pub use model::ColorModel;
pub use panel::{ColorSamplerPanel, PanelLayout, PanelPart};
pub use selectors::SelectorMessage;
