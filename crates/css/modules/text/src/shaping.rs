//! Text measurement with real fonts, shaped by cosmic-text.

use crate::{RenderContext, TextExtent, TextMeasurer, normal_line_height};
use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use css_orchestrator::style_model::ComputedStyle;
use log::{debug, trace};

/// Map a CSS font family name to a cosmic-text `Family`.
pub fn map_font_family(font_name: &str) -> Family<'_> {
    match font_name.to_lowercase().as_str() {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        _ => Family::Name(font_name),
    }
}

/// Build font attributes from the first usable entry of `font-family`.
fn prepare_font_attrs(style: &ComputedStyle) -> Attrs<'_> {
    let weight = if style.font_weight == 0 {
        400
    } else {
        style.font_weight
    };
    let family = style
        .font_family
        .as_deref()
        .and_then(|families| {
            families
                .split(',')
                .map(|name| name.trim().trim_matches('\'').trim_matches('"').trim())
                .find(|name| !name.is_empty())
        })
        .map_or(Family::SansSerif, map_font_family);
    Attrs::new().family(family).weight(Weight(weight))
}

/// Measures text by shaping it with the system fonts.
pub struct ShapingMeasurer {
    font_system: FontSystem,
}

impl Default for ShapingMeasurer {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ShapingMeasurer {
    /// Load the system fonts. This is slow; share one measurer per layout pass.
    pub fn new() -> Self {
        let font_system = FontSystem::new();
        debug!("[TEXT] loaded {} font faces", font_system.db().len());
        Self { font_system }
    }
}

impl TextMeasurer for ShapingMeasurer {
    fn measure(
        &mut self,
        text: &str,
        style: &ComputedStyle,
        context: &RenderContext,
    ) -> TextExtent {
        let line_height = normal_line_height(style);
        if text.is_empty() {
            return TextExtent {
                width: 0.0,
                height: line_height,
            };
        }

        let attrs = prepare_font_attrs(style);
        let metrics = Metrics::new(style.font_size, line_height);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let width = buffer
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0_f32, f32::max);
        let extent = TextExtent {
            width: context.snap_up(width),
            height: line_height,
        };
        trace!("[TEXT] shaped {text:?} @ {}px -> {extent:?}", style.font_size);
        extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_with_family(families: &str) -> ComputedStyle {
        ComputedStyle {
            font_family: Some(families.to_owned()),
            ..ComputedStyle::default()
        }
    }

    #[test]
    fn generic_families_map_case_insensitively() {
        assert_eq!(map_font_family("sans-serif"), Family::SansSerif);
        assert_eq!(map_font_family("Serif"), Family::Serif);
        assert_eq!(map_font_family("MONOSPACE"), Family::Monospace);
        assert_eq!(map_font_family("cursive"), Family::Cursive);
        assert_eq!(map_font_family("fantasy"), Family::Fantasy);
        assert_eq!(map_font_family("DejaVu Sans"), Family::Name("DejaVu Sans"));
    }

    #[test]
    fn first_family_is_unquoted_and_trimmed() {
        let style = style_with_family("  \"Noto Serif\" , serif");
        assert_eq!(prepare_font_attrs(&style).family, Family::Name("Noto Serif"));

        let style = style_with_family(" '' , 'Fira Mono', monospace");
        assert_eq!(prepare_font_attrs(&style).family, Family::Name("Fira Mono"));
    }

    #[test]
    fn missing_family_and_weight_use_defaults() {
        let style = ComputedStyle {
            font_weight: 0,
            ..ComputedStyle::default()
        };
        let attrs = prepare_font_attrs(&style);
        assert_eq!(attrs.family, Family::SansSerif);
        assert_eq!(attrs.weight, Weight(400));

        let bold = ComputedStyle {
            font_weight: 700,
            ..style_with_family("serif")
        };
        let attrs = prepare_font_attrs(&bold);
        assert_eq!(attrs.family, Family::Serif);
        assert_eq!(attrs.weight, Weight::BOLD);
    }

    #[test]
    fn empty_text_keeps_line_height() {
        let style = ComputedStyle {
            font_size: 10.0,
            ..ComputedStyle::default()
        };
        let extent = ShapingMeasurer::new().measure("", &style, &RenderContext::default());
        assert!(extent.width.abs() < f32::EPSILON);
        assert!((extent.height - 12.0).abs() < 1e-5);
    }
}
