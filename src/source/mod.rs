//! Source image adapter
//!
//! Decodes image data into a single representation: an RGBA8 pixel buffer
//! plus pixel dimensions. Recognition and rendering downstream only ever see
//! this type, never a platform image handle.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

/// Error constructing a source image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The encoded image could not be decoded.
    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
    /// A raw pixel buffer did not match the stated dimensions.
    #[error("pixel buffer is {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSize {
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
    },
}

/// A decoded image: RGBA8 pixels plus dimensions.
///
/// Cloning is cheap; the pixel buffer is shared.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: Arc<[u8]>,
    width: u32,
    height: u32,
}

impl SourceImage {
    /// Wrap an already-decoded RGBA8 buffer.
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self, ImageError> {
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(ImageError::BufferSize {
                expected,
                actual: pixels.len(),
                width,
                height,
            });
        }
        Ok(Self {
            pixels: pixels.into(),
            width,
            height,
        })
    }

    /// Decode from encoded bytes (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::from_dynamic(decoded))
    }

    /// Decode from a file on disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ImageError> {
        let decoded = image::open(path)?;
        Ok(Self::from_dynamic(decoded))
    }

    fn from_dynamic(decoded: image::DynamicImage) -> Self {
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            pixels: rgba.into_raw().into(),
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA8 pixel data, row-major, top-left origin.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_accepts_matching_buffer() {
        let image = SourceImage::from_rgba(vec![0u8; 4 * 2 * 4], 4, 2).unwrap();
        assert_eq!(image.dimensions(), (4, 2));
        assert_eq!(image.pixels().len(), 32);
    }

    #[test]
    fn test_from_rgba_rejects_short_buffer() {
        let result = SourceImage::from_rgba(vec![0u8; 10], 4, 2);
        assert!(matches!(result, Err(ImageError::BufferSize { .. })));
    }

    #[test]
    fn test_from_bytes_decodes_png() {
        let mut bytes = Vec::new();
        let png = image::RgbaImage::from_pixel(3, 5, image::Rgba([255, 0, 0, 255]));
        png.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();

        let image = SourceImage::from_bytes(&bytes).unwrap();
        assert_eq!(image.dimensions(), (3, 5));
        assert_eq!(&image.pixels()[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let result = SourceImage::from_bytes(b"not an image");
        assert!(matches!(result, Err(ImageError::Decode(_))));
    }

    #[test]
    fn test_clone_shares_pixels() {
        let image = SourceImage::from_rgba(vec![7u8; 16], 2, 2).unwrap();
        let clone = image.clone();
        assert!(std::ptr::eq(image.pixels().as_ptr(), clone.pixels().as_ptr()));
    }
}
