//! Packaging and validation tests for [`backframe::BackgroundImage`].
//!
//! These are pure logic tests over the surface abstraction; no media files
//! or FFmpeg calls are involved.

use backframe::{BackframeError, BackgroundImage, TargetFormat};

fn solid_buffer(width: u32, height: u32, stride: usize, value: u8) -> Vec<u8> {
    vec![value; stride * height as usize]
}

#[test]
fn packs_a_tight_rgb_buffer() {
    let (width, height) = (4, 3);
    let stride = width as usize * 3;
    let pixels = solid_buffer(width, height, stride, 0x7f);

    let image = BackgroundImage::from_buffer(pixels, width, height, stride, TargetFormat::Rgb8)
        .expect("tight buffer should package");

    assert_eq!(image.width(), width);
    assert_eq!(image.height(), height);
    assert_eq!(image.stride(), stride);
    assert_eq!(image.format(), TargetFormat::Rgb8);
    assert_eq!(image.pixels().len(), stride * height as usize);
    image.validate().expect("packaged image should validate");
}

#[test]
fn rejects_stride_shorter_than_row() {
    // 4 RGB pixels need 12 bytes per row; a stride of 8 cannot hold them.
    let pixels = solid_buffer(4, 3, 8, 0);
    let result = BackgroundImage::from_buffer(pixels, 4, 3, 8, TargetFormat::Rgb8);
    assert!(matches!(
        result,
        Err(BackframeError::SurfaceCreateFailed(_))
    ));
}

#[test]
fn rejects_buffer_shorter_than_stride_times_height() {
    let stride = 4usize * 3;
    let mut pixels = solid_buffer(4, 3, stride, 0);
    pixels.truncate(pixels.len() - 1);

    let result = BackgroundImage::from_buffer(pixels, 4, 3, stride, TargetFormat::Rgb8);
    match result {
        Err(BackframeError::BufferAllocFailed {
            actual, required, ..
        }) => {
            assert_eq!(required, stride * 3);
            assert_eq!(actual, stride * 3 - 1);
        }
        other => panic!("expected BufferAllocFailed, got {other:?}"),
    }
}

#[test]
fn rejects_zero_dimensions() {
    let result = BackgroundImage::from_buffer(Vec::new(), 0, 4, 0, TargetFormat::Rgb8);
    assert!(matches!(
        result,
        Err(BackframeError::SurfaceCreateFailed(_))
    ));

    let result = BackgroundImage::from_buffer(Vec::new(), 4, 0, 12, TargetFormat::Rgb8);
    assert!(matches!(
        result,
        Err(BackframeError::SurfaceCreateFailed(_))
    ));
}

#[test]
fn padded_stride_rows_are_addressed_correctly() {
    // 2x2 RGBA with 4 bytes of padding per row. Each row is filled with a
    // distinct value so row addressing mistakes are visible.
    let (width, height) = (2u32, 2u32);
    let stride = width as usize * 4 + 4;
    let mut pixels = vec![0u8; stride * height as usize];
    pixels[..width as usize * 4].fill(0xaa);
    pixels[stride..stride + width as usize * 4].fill(0xbb);

    let image = BackgroundImage::from_buffer(pixels, width, height, stride, TargetFormat::Rgba8)
        .expect("padded buffer should package");

    assert_eq!(image.row(0), &[0xaa; 8]);
    assert_eq!(image.row(1), &[0xbb; 8]);
}

#[test]
fn to_image_repacks_padded_rows() {
    let (width, height) = (2u32, 2u32);
    let stride = width as usize * 3 + 2;
    let mut pixels = vec![0u8; stride * height as usize];
    pixels[..width as usize * 3].fill(0x11);
    pixels[stride..stride + width as usize * 3].fill(0x22);

    let image = BackgroundImage::from_buffer(pixels, width, height, stride, TargetFormat::Rgb8)
        .expect("padded buffer should package");

    let dynamic = image.to_image().expect("conversion should succeed");
    assert_eq!(dynamic.width(), width);
    assert_eq!(dynamic.height(), height);

    let rgb = dynamic.to_rgb8();
    assert_eq!(rgb.get_pixel(0, 0).0, [0x11, 0x11, 0x11]);
    assert_eq!(rgb.get_pixel(1, 1).0, [0x22, 0x22, 0x22]);
}

#[test]
fn into_raw_hands_back_the_owned_buffer() {
    let stride = 3usize * 3;
    let pixels = solid_buffer(3, 3, stride, 0x42);
    let image = BackgroundImage::from_buffer(pixels.clone(), 3, 3, stride, TargetFormat::Rgb8)
        .expect("buffer should package");

    assert_eq!(image.into_raw(), pixels);
}

#[test]
fn rgba_stride_accounts_for_four_bytes_per_pixel() {
    // A buffer sized for RGB must not pass as RGBA at the same dimensions.
    let stride_rgb = 4usize * 3;
    let pixels = solid_buffer(4, 4, stride_rgb, 0);
    let result = BackgroundImage::from_buffer(pixels, 4, 4, stride_rgb, TargetFormat::Rgba8);
    assert!(matches!(
        result,
        Err(BackframeError::SurfaceCreateFailed(_))
    ));
}
