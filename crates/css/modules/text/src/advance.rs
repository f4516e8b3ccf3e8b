//! Font-independent text measurement from a per-character advance table.
//!
//! Used where no font system is available (headless layout, tests). Widths
//! approximate a proportional sans-serif face; heights use the line height.

use crate::{RenderContext, TextExtent, TextMeasurer, normal_line_height};
use css_orchestrator::style_model::ComputedStyle;
use log::trace;

/// Measures text as the sum of fixed per-character advances, in ems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvanceMeasurer {
    /// Advance of a character not covered by a more specific class.
    pub average_advance_em: f32,
}

impl Default for AdvanceMeasurer {
    #[inline]
    fn default() -> Self {
        Self {
            average_advance_em: 0.5,
        }
    }
}

/// Whether `character` occupies a full em square (CJK and fullwidth forms).
#[inline]
const fn is_wide(character: char) -> bool {
    matches!(
        character,
        '\u{1100}'..='\u{115F}'
            | '\u{2E80}'..='\u{A4CF}'
            | '\u{AC00}'..='\u{D7A3}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FF00}'..='\u{FF60}'
            | '\u{FFE0}'..='\u{FFE6}'
    )
}

/// Whether `character` takes no horizontal space.
#[inline]
const fn is_zero_width(character: char) -> bool {
    matches!(
        character,
        '\u{0300}'..='\u{036F}' | '\u{200B}'..='\u{200F}' | '\u{2060}' | '\u{FEFF}'
    )
}

impl AdvanceMeasurer {
    /// Advance of one character in ems.
    pub fn advance_em(&self, character: char) -> f32 {
        if character.is_control() || is_zero_width(character) {
            0.0
        } else if is_wide(character) {
            1.0
        } else if character == ' ' || character == '\u{00A0}' {
            0.25
        } else if character.is_ascii_uppercase() {
            0.65
        } else if character.is_ascii_digit() {
            0.55
        } else {
            self.average_advance_em
        }
    }
}

impl TextMeasurer for AdvanceMeasurer {
    fn measure(
        &mut self,
        text: &str,
        style: &ComputedStyle,
        context: &RenderContext,
    ) -> TextExtent {
        let ems: f32 = text.chars().map(|character| self.advance_em(character)).sum();
        let extent = TextExtent {
            width: context.snap_up(ems * style.font_size),
            height: normal_line_height(style),
        };
        trace!("[TEXT] {text:?} @ {}px -> {extent:?}", style.font_size);
        extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(font_size: f32) -> ComputedStyle {
        ComputedStyle {
            font_size,
            ..ComputedStyle::default()
        }
    }

    #[test]
    fn empty_text_keeps_line_height() {
        let extent = AdvanceMeasurer::default().measure("", &style(10.0), &RenderContext::default());
        assert!(extent.width.abs() < f32::EPSILON);
        assert!((extent.height - 12.0).abs() < 1e-5);
    }

    #[test]
    fn explicit_line_height_wins() {
        let mut with_line_height = style(16.0);
        with_line_height.line_height = Some(20.0);
        let extent =
            AdvanceMeasurer::default().measure("a", &with_line_height, &RenderContext::default());
        assert!((extent.height - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn widths_add_per_character_class() {
        let measurer = AdvanceMeasurer::default();
        // 'a' + ' ' + '漢' + combining acute
        let ems: f32 = "a 漢\u{0301}".chars().map(|ch| measurer.advance_em(ch)).sum();
        assert!((ems - 1.75).abs() < 1e-6);

        let extent = AdvanceMeasurer::default().measure("ab", &style(16.0), &RenderContext::default());
        assert!((extent.width - 16.0).abs() < 1e-5);
    }

    #[test]
    fn width_is_snapped_to_device_pixels() {
        let extent =
            AdvanceMeasurer::default().measure("a", &style(9.0), &RenderContext::new(2.0));
        // 0.5em * 9px = 4.5px, already on the half-pixel grid.
        assert!((extent.width - 4.5).abs() < 1e-5);
        let extent =
            AdvanceMeasurer::default().measure("a", &style(9.0), &RenderContext::new(1.0));
        assert!((extent.width - 5.0).abs() < 1e-5);
    }
}
