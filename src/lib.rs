//! # backframe
//!
//! Extract a single representative still frame from a video file as an
//! in-memory RGB(A) raster, suitable for use as a background image by a
//! rendering surface.
//!
//! The crate exposes one operation: point it at a video file, get back a
//! [`BackgroundImage`] holding an owned, validated pixel buffer with its
//! format, dimensions, and row stride. Decoding is powered by FFmpeg via
//! the [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next) crate.
//!
//! ## Quick start
//!
//! ```no_run
//! let image = backframe::load_background_video("clip.mp4").unwrap();
//! println!("{}x{}, stride {}", image.width(), image.height(), image.stride());
//!
//! // Hand the pixels to a renderer, or convert via the `image` crate:
//! image.to_image().unwrap().save("background.png").unwrap();
//! ```
//!
//! ## Pipeline
//!
//! Each call runs four strictly sequential stages, synchronously, with no
//! shared state between calls:
//!
//! 1. **Demux/Probe** — open the path as a media container and read its
//!    stream structure.
//! 2. **Stream selection** — pick the first stream tagged as video.
//! 3. **Decode** — build a matching decoder and pull packets until one frame
//!    decodes. This is the first *decodable* frame, which for codecs with
//!    B-frame reordering is not guaranteed to be the first frame in
//!    presentation order.
//! 4. **Convert & package** — rescale into a packed RGB(A) layout
//!    ([`TargetFormat`], bilinear filter) and copy the pixels into an owned
//!    buffer whose lifetime is independent of every decoder resource.
//!
//! Any stage failure short-circuits to a [`BackframeError`]; resources
//! acquired so far are released in reverse acquisition order on every exit
//! path. No partial image is ever returned.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://crates.io/crates/log) facade
//! (one `ERROR` line per failure branch, `INFO` for the stream dump and the
//! success summary); install any `log` backend to capture them. FFmpeg's own
//! stderr chatter is controlled separately via [`set_ffmpeg_log_level`].
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system.

pub mod convert;
pub mod decode;
pub mod error;
pub mod ffmpeg;
pub mod source;
pub mod surface;

use std::path::Path;

pub use convert::TargetFormat;
pub use error::BackframeError;
pub use ffmpeg::{FfmpegLogLevel, get_ffmpeg_log_level, set_ffmpeg_log_level};
pub use source::{MediaSource, VideoStreamInfo};
pub use surface::BackgroundImage;

use decode::FrameDecoder;

/// Load the first decodable frame of a video as a packed RGB background
/// image.
///
/// Equivalent to [`load_background_video_with`] with
/// [`TargetFormat::Rgb8`].
///
/// # Errors
///
/// See [`load_background_video_with`].
///
/// # Example
///
/// ```no_run
/// let image = backframe::load_background_video("intro.mkv").unwrap();
/// assert_eq!(image.format(), backframe::TargetFormat::Rgb8);
/// ```
pub fn load_background_video<P: AsRef<Path>>(path: P) -> Result<BackgroundImage, BackframeError> {
    load_background_video_with(path, TargetFormat::Rgb8)
}

/// Load the first decodable frame of a video in the given target format.
///
/// Runs the full pipeline — open/probe, stream selection, decode,
/// convert/package — and returns an owned, validated [`BackgroundImage`]
/// with the source stream's natural dimensions. The call blocks until a
/// frame is produced or a stage fails; every error is terminal for the call
/// and releases all acquired resources before returning.
///
/// # Errors
///
/// One [`BackframeError`] variant per failure point, from
/// [`OpenFailed`](BackframeError::OpenFailed) through
/// [`SurfaceInvalid`](BackframeError::SurfaceInvalid). The caller receives
/// either a fully valid image or an error, never a structurally-present but
/// internally-inconsistent surface.
pub fn load_background_video_with<P: AsRef<Path>>(
    path: P,
    target: TargetFormat,
) -> Result<BackgroundImage, BackframeError> {
    let mut source = MediaSource::open(path)?;
    source.log_layout();

    let stream_info = source.video_stream()?;
    let mut decoder = FrameDecoder::from_stream(&source, stream_info)?;

    let frame = decoder.first_frame(&mut source)?;

    let image = convert::convert_frame(
        &frame,
        decoder.format(),
        decoder.width(),
        decoder.height(),
        target,
    )?;
    image.validate()?;

    log::info!(
        "Loaded background frame from {}: {}x{} {:?}",
        source.path().display(),
        image.width(),
        image.height(),
        image.format(),
    );

    Ok(image)
}
