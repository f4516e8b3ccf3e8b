//! CSS Text Module Level 3 — measuring runs of text for layout.
//! Spec: <https://www.w3.org/TR/css-text-3/>
//!
//! Layout code measures through the [`TextMeasurer`] trait so that the font
//! backend stays swappable:
//! - [`AdvanceMeasurer`] — deterministic per-character advance table, no fonts needed.
//! - `ShapingMeasurer` (feature `shaping`) — shapes with system fonts via cosmic-text.

mod advance;
mod context;
mod measure;
#[cfg(feature = "shaping")]
mod shaping;

pub use advance::AdvanceMeasurer;
pub use context::RenderContext;
pub use measure::{TextExtent, TextMeasurer, normal_line_height};
#[cfg(feature = "shaping")]
pub use shaping::{ShapingMeasurer, map_font_family};
