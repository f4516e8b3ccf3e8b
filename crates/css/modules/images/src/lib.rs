//! CSS Images Module Level 3 — natural dimensions of image resources.
//! Spec: <https://www.w3.org/TR/css-images-3/#natural-dimensions>
//!
//! An image may declare any subset of width, height and aspect ratio. Vector
//! images frequently declare only a ratio (or nothing); raster images always
//! declare all three. Layout code reads them through [`ImageResource`].

pub mod raster;
pub mod store;

pub use raster::RasterImage;
pub use store::ImageStore;

/// Natural dimensions exposed by a loaded image.
///
/// Each query is independent: `None` means the image format does not declare
/// that value. Implementations never return non-positive or non-finite values.
pub trait ImageResource: Send + Sync {
    /// Natural width in CSS pixels.
    fn intrinsic_width(&self) -> Option<f32>;
    /// Natural height in CSS pixels.
    fn intrinsic_height(&self) -> Option<f32>;
    /// Natural aspect ratio, width divided by height.
    fn intrinsic_ratio(&self) -> Option<f32>;
}

/// Snapshot of the three optional natural dimensions of an image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntrinsicDimensions {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub ratio: Option<f32>,
}

impl IntrinsicDimensions {
    /// Query all three dimensions of `image`.
    #[inline]
    pub fn of(image: &dyn ImageResource) -> Self {
        Self {
            width: image.intrinsic_width(),
            height: image.intrinsic_height(),
            ratio: image.intrinsic_ratio(),
        }
    }
}

/// Drop values that cannot describe a natural dimension.
#[inline]
fn usable(value: Option<f32>) -> Option<f32> {
    value.filter(|dimension| dimension.is_finite() && *dimension > 0.0)
}

/// An image whose natural dimensions were declared by its source document
/// (e.g. the `width`/`height`/`viewBox` of an SVG root) rather than decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeclaredImage {
    width: Option<f32>,
    height: Option<f32>,
    ratio: Option<f32>,
}

impl DeclaredImage {
    /// Declare width and height; the ratio follows from them when both exist.
    #[inline]
    pub fn new(width: Option<f32>, height: Option<f32>) -> Self {
        let width = usable(width);
        let height = usable(height);
        let ratio = match (width, height) {
            (Some(natural_width), Some(natural_height)) => Some(natural_width / natural_height),
            _ => None,
        };
        Self {
            width,
            height,
            ratio,
        }
    }

    /// Override the aspect ratio, as a `viewBox` does for an unsized SVG.
    #[inline]
    #[must_use]
    pub fn with_ratio(mut self, ratio: Option<f32>) -> Self {
        self.ratio = usable(ratio);
        self
    }
}

impl ImageResource for DeclaredImage {
    #[inline]
    fn intrinsic_width(&self) -> Option<f32> {
        self.width
    }

    #[inline]
    fn intrinsic_height(&self) -> Option<f32> {
        self.height
    }

    #[inline]
    fn intrinsic_ratio(&self) -> Option<f32> {
        self.ratio
    }
}
