//! Spec: CSS 2.2 §10.1–§10.5 — percentages relative to the containing block.

use crate::{LayoutBox, compute_box_sides};
use css_orchestrator::style_model::SizeSpecified;
use log::trace;

/// The block against which percentage lengths of a box are resolved.
///
/// Supplied by the caller for the duration of a layout call and never mutated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainingBlock {
    /// Content width of the containing block in pixels.
    pub width: f32,
    /// Content height in pixels; None while the height depends on content.
    pub height: Option<f32>,
}

impl ContainingBlock {
    #[inline]
    pub const fn new(width: f32, height: Option<f32>) -> Self {
        Self { width, height }
    }
}

/// Resolve a specified length against a percentage basis.
///
/// Returns None for `auto`, and for percentages whose basis is indefinite
/// (which then behave as `auto`, CSS 2.2 §10.5).
#[inline]
pub fn resolve_length(value: SizeSpecified, basis: Option<f32>) -> Option<f32> {
    match value {
        SizeSpecified::Auto => None,
        SizeSpecified::Px(pixels) => Some(pixels),
        SizeSpecified::Percent(fraction) => basis.map(|reference| reference * fraction),
    }
}

impl LayoutBox {
    /// Replace the percentage-dependent parts of this box's geometry with
    /// absolute lengths.
    ///
    /// Edges are always rewritten. `width`/`height` are written only when they
    /// resolve to a definite length; an `auto` size leaves the current used
    /// value for the formatting context to compute.
    pub fn resolve_percentages(&mut self, containing_block: &ContainingBlock) {
        let sides = compute_box_sides(&self.style, containing_block);
        self.geometry.apply_sides(&sides);

        if let Some(width) = resolve_length(self.style.width, Some(containing_block.width)) {
            self.geometry.width = width.max(0.0);
        }
        if let Some(height) = resolve_length(self.style.height, containing_block.height) {
            self.geometry.height = height.max(0.0);
        }
        trace!(
            "[PERCENT] cb=({}, {:?}) -> width={} height={} margins=({}, {})",
            containing_block.width,
            containing_block.height,
            self.geometry.width,
            self.geometry.height,
            self.geometry.margin_left,
            self.geometry.margin_right
        );
    }
}
