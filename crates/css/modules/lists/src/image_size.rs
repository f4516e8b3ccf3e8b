//! Spec: CSS 2.2 §12.5.1 `list-style-image` — used size of an image marker.
//! <https://www.w3.org/TR/CSS21/generate.html#propdef-list-style-image>

use css_box::{ContainingBlock, LayoutBox};
use css_images::{ImageResource, IntrinsicDimensions};
use log::trace;

/// Return the used `(width, height)` of an image shown by `list-style-image`.
///
/// Known natural dimensions are kept as they are. A known ratio supplies a
/// missing dimension; with a ratio alone the longer side becomes one em. An
/// image that declares nothing usable falls back to a one-em square, with any
/// single declared dimension kept.
///
/// `one_em` and any ratio must be positive; debug builds panic otherwise.
pub fn list_style_image_size(dimensions: IntrinsicDimensions, one_em: f32) -> (f32, f32) {
    debug_assert!(one_em > 0.0, "non-positive em {one_em} for an image marker");
    debug_assert!(
        dimensions.ratio.is_none_or(|ratio| ratio > 0.0 && ratio.is_finite()),
        "image reported unusable ratio {:?}",
        dimensions.ratio
    );
    match (dimensions.width, dimensions.height, dimensions.ratio) {
        (Some(width), Some(height), _) => (width, height),
        (Some(width), None, Some(ratio)) => (width, width / ratio),
        (None, Some(height), Some(ratio)) => (height * ratio, height),
        // ratio >= 1: at least as wide as tall
        (None, None, Some(ratio)) if ratio >= 1.0 => (one_em, one_em / ratio),
        (None, None, Some(ratio)) => (one_em * ratio, one_em),
        (width, height, None) => (width.unwrap_or(one_em), height.unwrap_or(one_em)),
    }
}

/// Lay out an image marker: resolve its percentages, then size it from the
/// image's natural dimensions and the marker's font size.
///
/// Image markers are replaced boxes, but their used size ignores `width` and
/// `height`; whatever the percentages resolved them to is overwritten.
pub fn image_marker_layout(
    marker: &mut LayoutBox,
    image: &dyn ImageResource,
    containing_block: &ContainingBlock,
) {
    marker.resolve_percentages(containing_block);
    let dimensions = IntrinsicDimensions::of(image);
    let (width, height) = list_style_image_size(dimensions, marker.style.font_size);
    trace!("[MARKER] image {dimensions:?} -> {width}x{height}");
    marker.geometry.width = width;
    marker.geometry.height = height;
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn dims(width: Option<f32>, height: Option<f32>, ratio: Option<f32>) -> IntrinsicDimensions {
        IntrinsicDimensions {
            width,
            height,
            ratio,
        }
    }

    fn assert_size(actual: (f32, f32), expected: (f32, f32)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-5 && (actual.1 - expected.1).abs() < 1e-5,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn both_dimensions_ignore_ratio() {
        assert_size(list_style_image_size(dims(Some(30.0), Some(20.0), None), 16.0), (30.0, 20.0));
        // A contradicting ratio is not cross-checked.
        assert_size(
            list_style_image_size(dims(Some(30.0), Some(20.0), Some(4.0)), 16.0),
            (30.0, 20.0),
        );
    }

    #[test]
    fn ratio_completes_one_dimension() {
        let (width, height) = list_style_image_size(dims(Some(30.0), None, Some(1.5)), 16.0);
        assert_size((width, height), (30.0, 20.0));
        assert!((width / height - 1.5).abs() < 1e-5);

        assert_size(list_style_image_size(dims(None, Some(10.0), Some(0.5)), 16.0), (5.0, 10.0));
    }

    #[test]
    fn ratio_alone_pins_longer_side_to_one_em() {
        assert_size(list_style_image_size(dims(None, None, Some(2.0)), 16.0), (16.0, 8.0));
        assert_size(list_style_image_size(dims(None, None, Some(1.0)), 16.0), (16.0, 16.0));
        assert_size(list_style_image_size(dims(None, None, Some(0.5)), 10.0), (5.0, 10.0));
    }

    #[test]
    fn missing_everything_is_an_em_square() {
        assert_size(list_style_image_size(dims(None, None, None), 12.0), (12.0, 12.0));
    }

    #[test]
    fn single_dimension_without_ratio_keeps_it() {
        // The height comes from the image's own height query: a width-only
        // image gets a one-em height, not a copy of its width.
        assert_size(list_style_image_size(dims(Some(30.0), None, None), 12.0), (30.0, 12.0));
        assert_size(list_style_image_size(dims(None, Some(7.0), None), 12.0), (12.0, 7.0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-positive em")]
    fn zero_em_is_rejected() {
        list_style_image_size(dims(None, None, None), 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unusable ratio")]
    fn zero_ratio_is_rejected() {
        list_style_image_size(dims(Some(30.0), None, Some(0.0)), 16.0);
    }
}
