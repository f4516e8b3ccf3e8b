//! CSS Box Model Module Level 3 — Box dimensions, margins, borders, padding.
//! Spec: <https://www.w3.org/TR/css-box-3/>

pub mod geometry;
pub mod percentages;

pub use geometry::{BoxGeometry, LayoutBox};
pub use percentages::{ContainingBlock, resolve_length};

use css_orchestrator::style_model::ComputedStyle;

/// Used margin, padding and border widths of a box, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxSides {
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,

    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,

    pub border_top: f32,
    pub border_right: f32,
    pub border_bottom: f32,
    pub border_left: f32,
}

/// Resolve margin/padding/border widths from `ComputedStyle` against a containing block.
///
/// Percentages on every side refer to the containing block's *width*, including
/// the vertical sides (CSS 2.2 §8.3, §8.4). `auto` margins resolve to zero here;
/// formatting contexts that distribute free space do so afterwards.
/// Padding and border widths are clamped to be non-negative. Margins can be negative.
pub fn compute_box_sides(style: &ComputedStyle, containing_block: &ContainingBlock) -> BoxSides {
    let basis = Some(containing_block.width);
    let margin = |value| resolve_length(value, basis).unwrap_or(0.0);
    let padding = |value| resolve_length(value, basis).unwrap_or(0.0).max(0.0);

    BoxSides {
        margin_top: margin(style.margin.top),
        margin_right: margin(style.margin.right),
        margin_bottom: margin(style.margin.bottom),
        margin_left: margin(style.margin.left),

        padding_top: padding(style.padding.top),
        padding_right: padding(style.padding.right),
        padding_bottom: padding(style.padding.bottom),
        padding_left: padding(style.padding.left),

        border_top: style.border_width.top.max(0.0),
        border_right: style.border_width.right.max(0.0),
        border_bottom: style.border_width.bottom.max(0.0),
        border_left: style.border_width.left.max(0.0),
    }
}
