//! Raster images: natural dimensions probed from the encoded header.

use crate::ImageResource;
use anyhow::{Context as _, Result, bail};
use image::ImageReader;
use log::debug;
use std::io::Cursor;
use std::path::Path;

/// A decoded-on-demand raster image (PNG, JPEG, WebP).
///
/// Only the header is read; pixel data is left to the painter. One image pixel
/// maps to one CSS pixel, so all three natural dimensions are always present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
}

impl RasterImage {
    /// Build from known pixel dimensions.
    ///
    /// # Errors
    /// Returns an error if either dimension is zero.
    pub fn from_dimensions(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("raster image has an empty dimension ({width}x{height})");
        }
        Ok(Self { width, height })
    }

    /// Probe the dimensions of an encoded image held in memory.
    ///
    /// # Errors
    /// Returns an error if the format cannot be recognised or the header is malformed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .context("failed to sniff image format")?;
        let format = reader.format();
        let (width, height) = reader
            .into_dimensions()
            .with_context(|| format!("failed to read image header (format {format:?})"))?;
        debug!("[IMAGE] probed {format:?} {width}x{height}");
        Self::from_dimensions(width, height)
    }

    /// Probe the dimensions of an image file on disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or is not a supported image.
    pub fn open(path: &Path) -> Result<Self> {
        let (width, height) = image::image_dimensions(path)
            .with_context(|| format!("failed to read image dimensions of {}", path.display()))?;
        Self::from_dimensions(width, height)
    }

    #[inline]
    pub const fn pixel_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl ImageResource for RasterImage {
    #[inline]
    fn intrinsic_width(&self) -> Option<f32> {
        Some(self.width as f32)
    }

    #[inline]
    fn intrinsic_height(&self) -> Option<f32> {
        Some(self.height as f32)
    }

    #[inline]
    fn intrinsic_ratio(&self) -> Option<f32> {
        Some(self.width as f32 / self.height as f32)
    }
}
