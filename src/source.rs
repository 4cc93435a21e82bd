//! Media container handling: open, probe, and video stream selection.
//!
//! [`MediaSource`] wraps an FFmpeg demuxer context for a single input file.
//! It covers the first two pipeline stages: opening and probing the
//! container, and locating the first video stream. The demuxer context is
//! released when the `MediaSource` is dropped, after any decoder built on
//! top of it.

use std::path::{Path, PathBuf};

use ffmpeg_next::{codec, format::context::Input, media::Type};

use crate::error::BackframeError;

/// An opened media container.
///
/// Owns the FFmpeg input (demuxer) context and the stream metadata it
/// allocated during probing. Stream descriptors handed out by
/// [`video_stream`](MediaSource::video_stream) are views into this context
/// and do not outlive it.
pub struct MediaSource {
    pub(crate) input: Input,
    path: PathBuf,
}

/// Descriptor for the selected video stream.
///
/// Holds the stream's container index and codec identity. Width, height,
/// and pixel format are negotiated later by the decoder, which reads them
/// from the stream's codec parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoStreamInfo {
    /// Index of the stream within the container.
    pub index: usize,
    /// Identifier of the codec the stream is encoded with.
    pub codec_id: codec::Id,
}

impl MediaSource {
    /// Open a media file and probe its stream structure.
    ///
    /// Initialises FFmpeg (idempotent), opens the path as a media container,
    /// and reads enough of the stream to determine its structure.
    ///
    /// # Errors
    ///
    /// - [`BackframeError::OpenFailed`] if the path is unreadable or not a
    ///   recognised container.
    /// - [`BackframeError::ProbeFailed`] if the container opened but exposes
    ///   no streams.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BackframeError> {
        let path = path.as_ref().to_path_buf();

        ffmpeg_next::init().map_err(|error| BackframeError::OpenFailed {
            path: path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input = ffmpeg_next::format::input(&path).map_err(|error| {
            log::error!("Failed to read background video {}: {error}", path.display());
            BackframeError::OpenFailed {
                path: path.clone(),
                reason: error.to_string(),
            }
        })?;

        // format::input runs avformat_find_stream_info as part of the open,
        // so a context with zero streams means probing found no structure.
        if input.streams().count() == 0 {
            log::error!("No streams found in {}", path.display());
            return Err(BackframeError::ProbeFailed {
                path,
                reason: "container opened but no streams were found".to_string(),
            });
        }

        Ok(Self { input, path })
    }

    /// Path this source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Log a human-readable dump of the container's stream structure.
    ///
    /// Writes FFmpeg's own `av_dump_format` report to stderr (subject to the
    /// FFmpeg log level, see [`crate::set_ffmpeg_log_level`]) and mirrors a
    /// one-line summary per stream through the `log` facade. Diagnostic
    /// only; never fails.
    pub fn log_layout(&self) {
        ffmpeg_next::format::context::input::dump(&self.input, 0, self.path.to_str());

        for stream in self.input.streams() {
            let parameters = stream.parameters();
            log::info!(
                "Stream #{}: {:?} ({:?})",
                stream.index(),
                parameters.medium(),
                parameters.id(),
            );
        }
    }

    /// Select the first video stream in container order.
    ///
    /// Scans the stream list linearly and returns the first entry tagged as
    /// video; the lowest stream index wins, so alternate angles or other
    /// later video streams are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`BackframeError::NoVideoStream`] if the scan exhausts the
    /// stream list without a match.
    pub fn video_stream(&self) -> Result<VideoStreamInfo, BackframeError> {
        for stream in self.input.streams() {
            let parameters = stream.parameters();
            if parameters.medium() == Type::Video {
                return Ok(VideoStreamInfo {
                    index: stream.index(),
                    codec_id: parameters.id(),
                });
            }
        }

        log::error!("No video stream in {}", self.path.display());
        Err(BackframeError::NoVideoStream)
    }
}
