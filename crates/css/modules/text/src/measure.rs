use crate::RenderContext;
use css_orchestrator::style_model::ComputedStyle;

/// Size of a shaped run of text on a single line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextExtent {
    /// Advance width in CSS pixels.
    pub width: f32,
    /// Line height in CSS pixels (CSS `line-height`, not the glyph bounds).
    pub height: f32,
}

/// Measures text runs for layout.
///
/// Implementations may cache fonts or shaping results, hence `&mut self`.
pub trait TextMeasurer {
    /// Measure `text` set on one line in the font described by `style`.
    fn measure(&mut self, text: &str, style: &ComputedStyle, context: &RenderContext)
    -> TextExtent;
}

/// Used line height: explicit `line-height`, else `normal` (~1.2 × font-size).
#[inline]
pub fn normal_line_height(style: &ComputedStyle) -> f32 {
    style.line_height.unwrap_or(style.font_size * 1.2)
}
