//! Video decoding: decoder construction and the first-frame decode loop.
//!
//! [`FrameDecoder`] binds a decoder to the selected video stream and pulls
//! packets from the container until one frame decodes. Decoding stops at the
//! first decoded frame; nothing is cached and no seeking is performed.

use ffmpeg_next::{
    codec::{context::Context as CodecContext, decoder},
    format::Pixel,
    frame::Video as VideoFrame,
};

use crate::{
    error::BackframeError,
    source::{MediaSource, VideoStreamInfo},
};

/// A video decoder bound to one stream of a [`MediaSource`].
///
/// Construction resolves the codec, transfers the stream's codec parameters,
/// and opens the decoder, each step with its own failure mode. The decoder
/// must be dropped before the `MediaSource` it was built from.
pub struct FrameDecoder {
    decoder: decoder::Video,
    stream_index: usize,
}

impl FrameDecoder {
    /// Build and open a decoder for the selected video stream.
    ///
    /// # Errors
    ///
    /// - [`BackframeError::UnsupportedCodec`] if no decoder is registered
    ///   for the stream's codec id.
    /// - [`BackframeError::ParameterTransferFailed`] if the stream's codec
    ///   parameters cannot be applied to a fresh decoder context.
    /// - [`BackframeError::DecoderOpenFailed`] if the decoder cannot be
    ///   opened.
    pub fn from_stream(
        source: &MediaSource,
        stream_info: VideoStreamInfo,
    ) -> Result<Self, BackframeError> {
        // Resolve the decoder up front so an unregistered codec fails with
        // its own error kind before any decoder state is allocated.
        if decoder::find(stream_info.codec_id).is_none() {
            log::error!("Unsupported video codec: {:?}", stream_info.codec_id);
            return Err(BackframeError::UnsupportedCodec(format!(
                "{:?}",
                stream_info.codec_id
            )));
        }

        let stream = source
            .input
            .stream(stream_info.index)
            .ok_or(BackframeError::NoVideoStream)?;

        let context = CodecContext::from_parameters(stream.parameters()).map_err(|error| {
            log::error!("Can't convert codec parameters: {error}");
            BackframeError::ParameterTransferFailed(error.to_string())
        })?;

        let decoder = context.decoder().video().map_err(|error| {
            log::error!("Could not open video codec: {error}");
            BackframeError::DecoderOpenFailed(error.to_string())
        })?;

        Ok(Self {
            decoder,
            stream_index: stream_info.index,
        })
    }

    /// Negotiated frame width in pixels.
    pub fn width(&self) -> u32 {
        self.decoder.width()
    }

    /// Negotiated frame height in pixels.
    pub fn height(&self) -> u32 {
        self.decoder.height()
    }

    /// Negotiated source pixel format.
    pub fn format(&self) -> Pixel {
        self.decoder.format()
    }

    /// Decode packets until one frame is produced and return it.
    ///
    /// Pulls coded packets from the container in order. Packets belonging to
    /// other streams are discarded; matching packets are fed to the decoder,
    /// and the first frame the decoder emits is returned. Packet buffers are
    /// released after every iteration regardless of outcome. If the packet
    /// stream ends first, the decoder is flushed and drained once more.
    ///
    /// Note: this is the first *decodable* frame, not necessarily the first
    /// frame in presentation order — codecs with B-frame reordering may emit
    /// a frame that is displayed later than the stream's true first picture.
    /// For a background still this approximation is acceptable.
    ///
    /// # Errors
    ///
    /// Returns [`BackframeError::NoFrameDecoded`] if end-of-input is reached
    /// before any frame decodes. Corrupt packets are skipped, not fatal.
    pub fn first_frame(&mut self, source: &mut MediaSource) -> Result<VideoFrame, BackframeError> {
        let mut decoded = VideoFrame::empty();

        for (stream, packet) in source.input.packets() {
            if stream.index() != self.stream_index {
                continue;
            }

            if let Err(error) = self.decoder.send_packet(&packet) {
                // A corrupt packet is not terminal; later packets may decode.
                log::debug!("Skipping undecodable packet: {error}");
                continue;
            }

            if self.decoder.receive_frame(&mut decoded).is_ok() {
                return Ok(decoded);
            }
        }

        // Flush: a short stream may have its only frame buffered.
        if self.decoder.send_eof().is_ok() && self.decoder.receive_frame(&mut decoded).is_ok() {
            return Ok(decoded);
        }

        log::error!(
            "No decodable frame in {} before end of stream",
            source.path().display()
        );
        Err(BackframeError::NoFrameDecoded)
    }
}
