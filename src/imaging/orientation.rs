//! EXIF orientation correction.
//!
//! Cameras record physical rotation in the EXIF orientation tag (0x0112)
//! instead of rotating pixels at capture time. The normalizer pipes every
//! path-based decode through [`correct_orientation`] so callers always see
//! an upright image.
//!
//! Tag values handled: 3 (180°), 6 (90° CW), 8 (270° CW). Anything else,
//! including the mirrored variants, leaves the image untouched — the
//! listing backend has never produced mirrored uploads and a wrong guess
//! is worse than no rotation.

use image::DynamicImage;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Orientation metadata could not be read from the source file.
///
/// A file with no EXIF segment at all is *not* an error — that is the
/// absent-tag case and the image passes through unrotated. This error means
/// the file could not be opened or its EXIF body is corrupt.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("EXIF read failed: {0}")]
    Exif(#[from] exif::Error),
}

/// EXIF orientation value meaning "already upright".
const ORIENTATION_NORMAL: u32 = 1;

/// Read the orientation tag from `path` and rotate `image` upright.
///
/// Consumes the image: rotation produces a fresh buffer and the pre-rotation
/// pixels drop here. I/O and parse failures propagate — the caller decides
/// whether an unreadable photo aborts the operation.
pub fn correct_orientation(image: DynamicImage, path: &Path) -> Result<DynamicImage, MetadataError> {
    let tag = read_orientation_tag(path)?;
    Ok(apply_orientation(image, tag))
}

/// Read the EXIF orientation tag value from a file.
///
/// Returns 1 (normal) when the file carries no EXIF data or no orientation
/// field.
fn read_orientation_tag(path: &Path) -> Result<u32, MetadataError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        // No EXIF segment present: treat as upright, same as a missing tag.
        Err(exif::Error::NotFound(_)) => return Ok(ORIENTATION_NORMAL),
        Err(e) => return Err(e.into()),
    };

    Ok(exif
        .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .unwrap_or(ORIENTATION_NORMAL))
}

/// Map an EXIF orientation tag value to the matching clockwise rotation.
///
/// Unknown or unhandled values return the image unchanged.
pub fn apply_orientation(image: DynamicImage, tag: u32) -> DynamicImage {
    match tag {
        3 => image.rotate180(),
        6 => image.rotate90(),
        8 => image.rotate270(),
        _ => image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn blank(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::new(width, height))
    }

    #[test]
    fn tag_six_rotates_quarter_turn() {
        let out = apply_orientation(blank(40, 30), 6);
        assert_eq!((out.width(), out.height()), (30, 40));
    }

    #[test]
    fn tag_three_keeps_dimensions() {
        let out = apply_orientation(blank(40, 30), 3);
        assert_eq!((out.width(), out.height()), (40, 30));
    }

    #[test]
    fn tag_eight_rotates_quarter_turn() {
        let out = apply_orientation(blank(40, 30), 8);
        assert_eq!((out.width(), out.height()), (30, 40));
    }

    #[test]
    fn rotation_round_trip_restores_dimensions() {
        // 90° then 270° is a net full turn: dimensions swap exactly twice
        let quarter = apply_orientation(blank(40, 30), 6);
        assert_eq!((quarter.width(), quarter.height()), (30, 40));
        let full = apply_orientation(quarter, 8);
        assert_eq!((full.width(), full.height()), (40, 30));
    }

    #[test]
    fn unknown_tags_leave_image_unchanged() {
        for tag in [0, 1, 2, 4, 5, 7, 9, 99] {
            let out = apply_orientation(blank(40, 30), tag);
            assert_eq!((out.width(), out.height()), (40, 30), "tag {tag}");
        }
    }

    #[test]
    fn missing_file_is_a_metadata_error() {
        let result = correct_orientation(blank(10, 10), Path::new("/nonexistent/photo.jpg"));
        assert!(matches!(result, Err(MetadataError::Io(_))));
    }

    #[test]
    fn rotation_content_moves_correctly() {
        // Single red pixel at top-left; after 90° CW it lands at top-right
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        let rotated = apply_orientation(DynamicImage::ImageRgba8(img), 6);
        let rotated = rotated.into_rgba8();
        assert_eq!((rotated.width(), rotated.height()), (2, 3));
        assert_eq!(rotated.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }
}
