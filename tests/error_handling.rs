//! Error handling integration tests.
//!
//! These tests exercise the failure branches that need no media fixtures:
//! missing paths, non-media files, and repeated failing calls.

use backframe::{BackframeError, load_background_video};

#[test]
fn open_nonexistent_file() {
    let result = load_background_video("this_file_does_not_exist.mp4");
    assert!(matches!(
        result,
        Err(BackframeError::OpenFailed { .. })
    ));

    let error_message = result.unwrap_err().to_string();
    assert!(
        error_message.contains("Failed to open media file"),
        "Error message should mention file open failure: {error_message}",
    );
}

#[test]
fn open_garbage_file() {
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let invalid_file_path = temporary_directory.path().join("invalid.mp4");
    std::fs::write(&invalid_file_path, b"this is not a media file")
        .expect("Failed to write invalid file");

    let result = load_background_video(&invalid_file_path);
    assert!(result.is_err(), "Expected error for non-media file");
    // Depending on how far FFmpeg's probing gets, this surfaces as either an
    // open or a probe failure; both are terminal and no image is returned.
    assert!(matches!(
        result,
        Err(BackframeError::OpenFailed { .. } | BackframeError::ProbeFailed { .. })
    ));
}

#[test]
fn open_empty_file() {
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let empty_file_path = temporary_directory.path().join("empty.mp4");
    std::fs::write(&empty_file_path, b"").expect("Failed to write empty file");

    let result = load_background_video(&empty_file_path);
    assert!(result.is_err(), "Expected error for empty file");
}

#[test]
fn error_includes_path_context() {
    let result = load_background_video("/no/such/directory/video.webm");
    let error_message = result.unwrap_err().to_string();
    assert!(
        error_message.contains("video.webm"),
        "Error message should name the offending path: {error_message}",
    );
}

#[test]
fn repeated_failing_calls_do_not_accumulate_state() {
    // Every failure branch must release what it acquired; a hundred failing
    // opens should neither panic nor exhaust file descriptors.
    for _ in 0..100 {
        let result = load_background_video("missing_input.mp4");
        assert!(result.is_err());
    }
}
