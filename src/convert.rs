//! Pixel-format conversion of a decoded frame into a packed RGB(A) buffer.
//!
//! This stage owns the main correctness hazard of the pipeline: the
//! destination frame must be fully allocated (buffer and per-row stride)
//! *before* the scaler writes into it, and the resulting pixels must be
//! copied out into an owned buffer before the FFmpeg resources that produced
//! them are torn down.

use ffmpeg_next::{
    format::Pixel,
    frame::Video as VideoFrame,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};
use ffmpeg_sys_next::AVPixelFormat;

use crate::{error::BackframeError, surface::BackgroundImage};

/// Target pixel format for the converted background image.
///
/// Both variants are packed (interleaved) layouts, chosen to match what
/// rendering backends accept directly as texture or surface data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetFormat {
    /// 8-bit packed RGB, 3 bytes per pixel. This is the default.
    #[default]
    Rgb8,
    /// 8-bit packed RGBA, 4 bytes per pixel, alpha set to opaque.
    Rgba8,
}

impl TargetFormat {
    /// Bytes per pixel for this format.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            TargetFormat::Rgb8 => 3,
            TargetFormat::Rgba8 => 4,
        }
    }

    /// Map to the corresponding FFmpeg pixel format constant.
    pub(crate) fn to_ffmpeg_pixel(self) -> Pixel {
        match self {
            TargetFormat::Rgb8 => Pixel::RGB24,
            TargetFormat::Rgba8 => Pixel::RGBA,
        }
    }
}

/// Rescale a decoded frame into `target` format and package it as an owned
/// [`BackgroundImage`].
///
/// The destination frame is allocated up front and verified before the scale
/// call runs. After scaling, the pixel rows are copied (honouring the
/// destination stride) into a tightly-packed buffer owned by the returned
/// image, so the image stays valid after every decoder resource is dropped.
///
/// # Errors
///
/// - [`BackframeError::FrameAllocFailed`] if the destination frame has no
///   backing buffer.
/// - [`BackframeError::BufferAllocFailed`] if the allocated buffer is
///   smaller than the target format and dimensions require.
/// - [`BackframeError::ConversionContextFailed`] if the converter cannot be
///   built for the format pair, or fails while scaling.
/// - Packaging errors from [`BackgroundImage::from_buffer`].
pub(crate) fn convert_frame(
    frame: &VideoFrame,
    source_format: Pixel,
    width: u32,
    height: u32,
    target: TargetFormat,
) -> Result<BackgroundImage, BackframeError> {
    let pixel = target.to_ffmpeg_pixel();
    let bytes_per_pixel = target.bytes_per_pixel();

    // Sizing must precede the scale call: a frame holder whose data pointers
    // were never pointed at an allocated buffer is an invalid scaler input.
    let required = unsafe {
        ffmpeg_sys_next::av_image_get_buffer_size(
            AVPixelFormat::from(pixel),
            width as i32,
            height as i32,
            1,
        )
    };
    if required <= 0 {
        log::error!("Can't size {width}x{height} {target:?} image buffer");
        return Err(BackframeError::BufferAllocFailed {
            width,
            height,
            actual: 0,
            required: (width as usize) * (height as usize) * bytes_per_pixel,
        });
    }
    let required = required as usize;

    let mut converted = VideoFrame::new(pixel, width, height);
    if unsafe { (*converted.as_ptr()).data[0].is_null() } {
        log::error!("Can't allocate {width}x{height} destination frame");
        return Err(BackframeError::FrameAllocFailed(format!(
            "destination frame for {width}x{height} {target:?} has no pixel buffer"
        )));
    }

    let stride = converted.stride(0);
    let row_bytes = (width as usize) * bytes_per_pixel;
    let available = stride * (height as usize);
    if stride < row_bytes || available < required {
        log::error!(
            "Destination buffer undersized: stride {stride}, {available} bytes for {required}"
        );
        return Err(BackframeError::BufferAllocFailed {
            width,
            height,
            actual: available,
            required,
        });
    }

    let mut scaler = ScalingContext::get(
        source_format,
        width,
        height,
        pixel,
        width,
        height,
        ScalingFlags::BILINEAR,
    )
    .map_err(|error| {
        log::error!("Can't build {source_format:?} -> {pixel:?} converter: {error}");
        BackframeError::ConversionContextFailed(error.to_string())
    })?;

    scaler
        .run(frame, &mut converted)
        .map_err(|error| BackframeError::ConversionContextFailed(error.to_string()))?;

    // Copy out with the destination stride; the returned image owns its
    // pixels independently of the frame we scaled into.
    let data = converted.data(0);
    let pixels = if stride == row_bytes {
        data[..row_bytes * (height as usize)].to_vec()
    } else {
        let mut buffer = Vec::with_capacity(row_bytes * (height as usize));
        for row in 0..(height as usize) {
            let start = row * stride;
            buffer.extend_from_slice(&data[start..start + row_bytes]);
        }
        buffer
    };

    BackgroundImage::from_buffer(pixels, width, height, row_bytes, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_is_three_bytes_per_pixel() {
        assert_eq!(TargetFormat::Rgb8.bytes_per_pixel(), 3);
        assert_eq!(TargetFormat::Rgb8.to_ffmpeg_pixel(), Pixel::RGB24);
    }

    #[test]
    fn rgba8_is_four_bytes_per_pixel() {
        assert_eq!(TargetFormat::Rgba8.bytes_per_pixel(), 4);
        assert_eq!(TargetFormat::Rgba8.to_ffmpeg_pixel(), Pixel::RGBA);
    }

    #[test]
    fn default_target_is_rgb8() {
        assert_eq!(TargetFormat::default(), TargetFormat::Rgb8);
    }
}
