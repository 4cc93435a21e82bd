//! Fixture-backed extraction integration tests.
//!
//! Tests in this file require media fixtures under `tests/fixtures/` and are
//! skipped when the files are absent. Suitable fixtures can be generated
//! with ffmpeg, e.g.:
//!
//! ```text
//! ffmpeg -f lavfi -i testsrc=duration=2:size=320x240:rate=25 tests/fixtures/sample_video.mp4
//! ffmpeg -f lavfi -i sine=duration=2 tests/fixtures/sample_audio_only.mp4
//! ```

use std::path::Path;

use backframe::{
    BackframeError, MediaSource, TargetFormat, load_background_video,
    load_background_video_with,
};

fn sample_video_path() -> &'static str {
    "tests/fixtures/sample_video.mp4"
}

fn sample_audio_only_path() -> &'static str {
    "tests/fixtures/sample_audio_only.mp4"
}

#[test]
fn image_matches_stream_dimensions() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let image = load_background_video(path).expect("Failed to load background frame");
    assert_eq!(image.width(), 320);
    assert_eq!(image.height(), 240);
    assert_eq!(image.format(), TargetFormat::Rgb8);

    // Round-trip property: stride covers a full row, buffer covers all rows.
    assert!(image.stride() >= image.width() as usize * 3);
    assert!(image.pixels().len() >= image.stride() * image.height() as usize);
    image.validate().expect("returned image must be valid");
}

#[test]
fn rgba_target_produces_four_channel_image() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let image = load_background_video_with(path, TargetFormat::Rgba8)
        .expect("Failed to load RGBA background frame");
    assert_eq!(image.format(), TargetFormat::Rgba8);
    assert!(image.stride() >= image.width() as usize * 4);
}

#[test]
fn loading_twice_is_deterministic() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let first = load_background_video(path).expect("First load failed");
    let second = load_background_video(path).expect("Second load failed");

    assert_eq!(first.width(), second.width());
    assert_eq!(first.height(), second.height());
    assert_eq!(first.stride(), second.stride());
    assert_eq!(first.pixels(), second.pixels());
}

#[test]
fn audio_only_file_has_no_video_stream() {
    let path = sample_audio_only_path();
    if !Path::new(path).exists() {
        return;
    }

    let result = load_background_video(path);
    assert!(matches!(result, Err(BackframeError::NoVideoStream)));
}

#[test]
fn stream_selection_picks_lowest_index() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let source = MediaSource::open(path).expect("Failed to open sample video");
    let info = source.video_stream().expect("Sample video should have video");
    assert_eq!(info.index, 0, "First video stream should win");
}

#[test]
fn converted_image_saves_via_image_crate() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let image = load_background_video(path).expect("Failed to load background frame");
    let dynamic = image.to_image().expect("Conversion to DynamicImage failed");

    let tmp = tempfile::tempdir().expect("Failed to create temp dir");
    let out = tmp.path().join("background.png");
    dynamic.save(&out).expect("Failed to save PNG");
    assert!(out.exists());
}
