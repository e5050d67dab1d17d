//! Pure calculation functions for downsampled decoding.
//!
//! The factor math here is pure and testable without any I/O or images;
//! [`decimate`] is the only function that touches pixels.

use image::{DynamicImage, RgbaImage};

/// Maximum output width for normalized images, in pixels.
pub const MAX_WIDTH: u32 = 1024;
/// Maximum output height for normalized images, in pixels.
pub const MAX_HEIGHT: u32 = 1024;

/// Calculate the integer downsample factor for decoding a source image into
/// a bounded target area.
///
/// The factor is a per-axis pixel stride: 1 keeps every pixel, 2 keeps every
/// other pixel per axis, and so on. The chosen factor is the closest one that
/// still leaves both output dimensions equal to or larger than the requested
/// bounds — the smaller of the two axis ratios wins, favoring less
/// aggressive downsampling.
///
/// Extreme aspect ratios (a panorama with a huge width but modest height)
/// can pass the ratio test and still decode to an uncomfortably large
/// buffer, so the factor is bumped until total output pixels fit within
/// twice the requested area.
///
/// # Examples
/// ```
/// # use listing_core::imaging::compute_downsample_factor;
/// // Already within bounds: no downsampling
/// assert_eq!(compute_downsample_factor(800, 600, 1024, 1024), 1);
///
/// // 4:1 oversize on both axes
/// assert_eq!(compute_downsample_factor(4096, 4096, 1024, 1024), 4);
/// ```
pub fn compute_downsample_factor(width: u32, height: u32, max_w: u32, max_h: u32) -> u32 {
    let mut factor = 1u32;

    if height > max_h || width > max_w {
        let height_ratio = (height as f32 / max_h as f32).round() as u32;
        let width_ratio = (width as f32 / max_w as f32).round() as u32;
        factor = height_ratio.min(width_ratio);

        // Panorama guard: anything more than 2x the requested pixel count
        // gets sampled down further. Float division so a zero ratio from the
        // min above (one tiny axis) falls through to the loop instead of
        // dividing by zero.
        let total_pixels = width as f32 * height as f32;
        let pixel_cap = (max_w * max_h * 2) as f32;
        while total_pixels / (factor as f32 * factor as f32) > pixel_cap {
            factor += 1;
        }
    }

    factor.max(1)
}

/// Decimate an image by keeping every `stride`-th pixel per axis.
///
/// Output dimensions are `ceil(dim / stride)`, so every source block
/// contributes one pixel and nonzero input never collapses to zero. A stride
/// of 1 (or 0) returns the image unchanged.
///
/// Consumes the input: the full-resolution buffer drops here, immediately
/// after the reduced copy is built.
pub fn decimate(image: DynamicImage, stride: u32) -> DynamicImage {
    if stride <= 1 {
        return image;
    }

    let out_w = image.width().div_ceil(stride);
    let out_h = image.height().div_ceil(stride);
    let source = image.into_rgba8();
    let reduced = RgbaImage::from_fn(out_w, out_h, |x, y| *source.get_pixel(x * stride, y * stride));
    DynamicImage::ImageRgba8(reduced)
}
