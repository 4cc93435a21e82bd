//! Error types for the `backframe` crate.
//!
//! This module defines [`BackframeError`], the unified error type returned by
//! every fallible operation in the crate. Each variant corresponds to one
//! stage of the frame-acquisition pipeline, and every variant is terminal:
//! there is no retry policy, and the caller receives either a fully valid
//! image or an error.

use std::path::PathBuf;

use thiserror::Error;

/// The unified error type for all `backframe` operations.
///
/// Variants are ordered by pipeline stage: container open/probe, stream
/// selection, decoder construction, decoding, conversion, and packaging.
/// Variants carry enough context to diagnose the problem without additional
/// logging at the call site.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackframeError {
    /// The path could not be opened or recognised as a media container.
    #[error("Failed to open media file at {path}: {reason}")]
    OpenFailed {
        /// Path that was passed to [`crate::load_background_video`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The container opened but its stream structure could not be determined.
    #[error("Failed to probe stream structure of {path}: {reason}")]
    ProbeFailed {
        /// Path of the container that failed probing.
        path: PathBuf,
        /// Underlying reason probing failed.
        reason: String,
    },

    /// The container does not contain a video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// No decoder is registered for the stream's codec.
    #[error("Unsupported video codec: {0}")]
    UnsupportedCodec(String),

    /// The stream's codec parameters could not be transferred to a decoder
    /// context.
    #[error("Failed to transfer codec parameters to decoder: {0}")]
    ParameterTransferFailed(String),

    /// The decoder could not be opened.
    #[error("Could not open video decoder: {0}")]
    DecoderOpenFailed(String),

    /// A frame holder could not be allocated.
    #[error("Failed to allocate frame holder: {0}")]
    FrameAllocFailed(String),

    /// The packet stream reached end-of-input before any frame decoded.
    #[error("No decodable video frame found before end of stream")]
    NoFrameDecoded,

    /// The pixel-format converter could not be built or run.
    #[error("Failed to convert frame to target pixel format: {0}")]
    ConversionContextFailed(String),

    /// The destination pixel buffer is missing or smaller than the target
    /// format requires.
    #[error(
        "Pixel buffer too small for {width}x{height} output: got {actual} bytes, need {required}"
    )]
    BufferAllocFailed {
        /// Target image width in pixels.
        width: u32,
        /// Target image height in pixels.
        height: u32,
        /// Number of bytes actually available.
        actual: usize,
        /// Number of bytes the format and dimensions require.
        required: usize,
    },

    /// The packaging step rejected the buffer/stride combination.
    #[error("Failed to create image surface: {0}")]
    SurfaceCreateFailed(String),

    /// The surface was constructed but reports an internal error status.
    #[error("Image surface is invalid: {0}")]
    SurfaceInvalid(String),
}
