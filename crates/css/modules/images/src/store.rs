//! URL-keyed cache of loaded images, consulted when generating markers for
//! `list-style-image`.

use crate::{ImageResource, RasterImage};
use anyhow::{Context as _, Result};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// Images fetched for a document, keyed by their resolved URL.
///
/// Fetching is the caller's business; the store only decodes what it is handed.
#[derive(Default)]
pub struct ImageStore {
    images: HashMap<String, Arc<dyn ImageResource>>,
}

impl ImageStore {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already-constructed resource under `url`.
    pub fn insert(&mut self, url: impl Into<String>, image: Arc<dyn ImageResource>) {
        self.images.insert(url.into(), image);
    }

    /// Probe `bytes` as a raster image and register it under `url`.
    ///
    /// # Errors
    /// Returns an error if the bytes are not a supported raster image; the
    /// store is left unchanged in that case.
    pub fn insert_encoded(&mut self, url: impl Into<String>, bytes: &[u8]) -> Result<()> {
        let url = url.into();
        let raster =
            RasterImage::from_bytes(bytes).with_context(|| format!("while loading {url}"))?;
        debug!("[IMAGE] stored {url} ({:?})", raster.pixel_size());
        self.images.insert(url, Arc::new(raster));
        Ok(())
    }

    /// Look up the resource registered under `url`.
    #[inline]
    pub fn get(&self, url: &str) -> Option<Arc<dyn ImageResource>> {
        self.images.get(url).map(Arc::clone)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
