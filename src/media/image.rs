// SPDX-License-Identifier: MPL-2.0
//! Decoded RGBA images shared between the host, the viewer and the share path.

use crate::domain::geometry::Size;
use crate::error::{Error, Result};
use image_rs::{GenericImageView, RgbaImage};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Straight-alpha RGBA8 pixels with their dimensions.
///
/// Pixels are stored in an `Arc` so the image can sit in the viewer's
/// binding and be handed to a share surface without copying.
#[derive(Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ImageData {
    /// Creates a new `ImageData` from straight-alpha RGBA pixels.
    ///
    /// Returns an error when the buffer length does not match the dimensions.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = u64::from(width) * u64::from(height) * 4;
        if pixels.len() as u64 != expected {
            return Err(Error::Image(format!(
                "expected {expected} bytes for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba_bytes: Arc::new(pixels),
        })
    }

    /// Wraps pixels whose length is already known to match the dimensions.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len() as u64, u64::from(width) * u64::from(height) * 4);
        Self {
            width,
            height,
            rgba_bytes: Arc::new(pixels),
        }
    }

    /// An image with no pixels. Composites as nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            rgba_bytes: Arc::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Dimensions as a layout size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Copies the pixels into an `image` buffer for encoding.
    #[must_use]
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
    }

    /// Whether both handles point at the same pixel buffer.
    #[must_use]
    pub fn shares_pixels_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rgba_bytes, &other.rgba_bytes)
    }
}

impl From<RgbaImage> for ImageData {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            rgba_bytes: Arc::new(image.into_raw()),
        }
    }
}

/// Decodes an image file into RGBA8.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = std::fs::read(path)?;
    let img = image_rs::load_from_memory(&img_bytes)?;
    let (width, height) = img.dimensions();
    ImageData::from_rgba(width, height, img.to_rgba8().into_vec())
}

/// Encodes `image` as PNG at `path`.
pub fn save_png<P: AsRef<Path>>(image: &ImageData, path: P) -> Result<()> {
    let buffer = image
        .to_rgba_image()
        .ok_or_else(|| Error::Image("pixel buffer does not match dimensions".into()))?;
    buffer.save_with_format(path, image_rs::ImageFormat::Png)?;
    Ok(())
}
