//! The packaged result image.
//!
//! [`BackgroundImage`] owns the converted pixel buffer together with its
//! format, dimensions, and row stride. It is the only artifact that survives
//! pipeline teardown: the buffer is copied out of FFmpeg-owned memory during
//! conversion, so nothing here borrows from the decoder or container.

use image::{DynamicImage, RgbImage, RgbaImage};

use crate::{convert::TargetFormat, error::BackframeError};

/// An owned RGB(A) raster suitable as a rendering surface's background.
///
/// Construction validates the buffer/stride/dimension combination, and
/// [`validate`](BackgroundImage::validate) provides an explicit
/// post-construction status check; a `BackgroundImage` handed to a caller by
/// [`crate::load_background_video`] has passed both.
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    stride: usize,
    format: TargetFormat,
}

impl BackgroundImage {
    /// Package a pixel buffer into a `BackgroundImage`.
    ///
    /// `stride` is the byte distance between the starts of consecutive rows
    /// in `pixels`; it may exceed `width × bytes-per-pixel` when rows carry
    /// alignment padding.
    ///
    /// # Errors
    ///
    /// - [`BackframeError::SurfaceCreateFailed`] if the dimensions are zero
    ///   or the stride cannot hold one row of pixels.
    /// - [`BackframeError::BufferAllocFailed`] if the buffer is smaller than
    ///   `stride × height`.
    pub fn from_buffer(
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        stride: usize,
        format: TargetFormat,
    ) -> Result<Self, BackframeError> {
        if width == 0 || height == 0 {
            return Err(BackframeError::SurfaceCreateFailed(format!(
                "zero-sized image ({width}x{height})"
            )));
        }

        let row_bytes = (width as usize) * format.bytes_per_pixel();
        if stride < row_bytes {
            return Err(BackframeError::SurfaceCreateFailed(format!(
                "stride {stride} cannot hold a row of {row_bytes} bytes"
            )));
        }

        let required = stride * (height as usize);
        if pixels.len() < required {
            return Err(BackframeError::BufferAllocFailed {
                width,
                height,
                actual: pixels.len(),
                required,
            });
        }

        Ok(Self {
            pixels,
            width,
            height,
            stride,
            format,
        })
    }

    /// Explicitly check the surface's internal consistency.
    ///
    /// A structurally-present surface can still be unusable if its buffer,
    /// stride, and dimensions disagree. This check runs before the image is
    /// returned to the caller, so a caller never receives an image that
    /// merely looks valid.
    ///
    /// # Errors
    ///
    /// Returns [`BackframeError::SurfaceInvalid`] describing the first
    /// inconsistency found.
    pub fn validate(&self) -> Result<(), BackframeError> {
        let row_bytes = (self.width as usize) * self.format.bytes_per_pixel();

        if self.width == 0 || self.height == 0 {
            return Err(BackframeError::SurfaceInvalid(format!(
                "zero-sized surface ({}x{})",
                self.width, self.height
            )));
        }
        if self.stride < row_bytes {
            return Err(BackframeError::SurfaceInvalid(format!(
                "stride {} shorter than row width {row_bytes}",
                self.stride
            )));
        }
        if self.pixels.len() < self.stride * (self.height as usize) {
            return Err(BackframeError::SurfaceInvalid(format!(
                "buffer holds {} bytes, surface claims {}",
                self.pixels.len(),
                self.stride * (self.height as usize)
            )));
        }

        Ok(())
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte distance between the starts of consecutive pixel rows.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel format of the buffer.
    pub fn format(&self) -> TargetFormat {
        self.format
    }

    /// The full pixel buffer, including any per-row padding.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One row of pixels, without padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {y} out of range ({})", self.height);
        let start = (y as usize) * self.stride;
        let row_bytes = (self.width as usize) * self.format.bytes_per_pixel();
        &self.pixels[start..start + row_bytes]
    }

    /// Consume the image, returning its owned pixel buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Copy the pixels into an [`image::DynamicImage`].
    ///
    /// Repacks padded rows into a tight buffer if necessary.
    ///
    /// # Errors
    ///
    /// Returns [`BackframeError::SurfaceCreateFailed`] if the `image` crate
    /// rejects the buffer (should not happen for a validated surface).
    pub fn to_image(&self) -> Result<DynamicImage, BackframeError> {
        let row_bytes = (self.width as usize) * self.format.bytes_per_pixel();
        let tight = if self.stride == row_bytes {
            self.pixels[..row_bytes * (self.height as usize)].to_vec()
        } else {
            let mut buffer = Vec::with_capacity(row_bytes * (self.height as usize));
            for y in 0..self.height {
                buffer.extend_from_slice(self.row(y));
            }
            buffer
        };

        let image = match self.format {
            TargetFormat::Rgb8 => {
                RgbImage::from_raw(self.width, self.height, tight).map(DynamicImage::ImageRgb8)
            }
            TargetFormat::Rgba8 => {
                RgbaImage::from_raw(self.width, self.height, tight).map(DynamicImage::ImageRgba8)
            }
        };

        image.ok_or_else(|| {
            BackframeError::SurfaceCreateFailed(
                "image crate rejected the pixel buffer".to_string(),
            )
        })
    }
}
