//! High-level decode pipeline.
//!
//! Combines bounds probing, downsample-factor math, and orientation
//! correction into the entry points the application calls: [`normalize`]
//! for the standard 1024×1024 bound, [`decode_downsampled`] for explicit
//! bounds, and [`decode_from_stream`] for sources without a filesystem path.

use super::orientation::{MetadataError, correct_orientation};
use super::sampling::{MAX_HEIGHT, MAX_WIDTH, compute_downsample_factor, decimate};
use image::DynamicImage;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// The source is missing, unreadable, or not a decodable image.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Failure of the combined decode + orientation pipeline.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

/// Fixed decimation stride for stream sources whose dimensions are not
/// probed in advance.
const STREAM_SAMPLE_FACTOR: u32 = 3;

/// Decode only the image bounds from `path`. No pixel data is allocated.
pub fn probe_dimensions(path: &Path) -> Result<(u32, u32), DecodeError> {
    Ok(image::image_dimensions(path)?)
}

/// Decode `path` into an upright image bounded by 1024×1024.
///
/// The standard entry point for photos headed to a listing screen or an
/// upload payload.
pub fn normalize(path: &Path) -> Result<DynamicImage, NormalizeError> {
    decode_downsampled(path, MAX_WIDTH, MAX_HEIGHT)
}

/// Decode `path` with downsampling bounded by `max_w` × `max_h`, then
/// correct orientation from the file's EXIF metadata.
///
/// Probes dimensions first so the decimation stride is known before any
/// pixels are read.
pub fn decode_downsampled(
    path: &Path,
    max_w: u32,
    max_h: u32,
) -> Result<DynamicImage, NormalizeError> {
    let (width, height) = probe_dimensions(path)?;
    let factor = compute_downsample_factor(width, height, max_w, max_h);

    let full = image::open(path).map_err(DecodeError::Decode)?;
    let reduced = decimate(full, factor);

    Ok(correct_orientation(reduced, path)?)
}

/// Decode an image from a byte stream with a fixed downsample stride.
///
/// Used when the source has no path to probe: the stride is always
/// [`STREAM_SAMPLE_FACTOR`] and no orientation correction is applied,
/// since a bare stream carries no metadata source to read it from.
pub fn decode_from_stream<R: Read>(mut reader: R) -> Result<DynamicImage, DecodeError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let full = image::load_from_memory(&bytes)?;
    Ok(decimate(full, STREAM_SAMPLE_FACTOR))
}
