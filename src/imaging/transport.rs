//! Transport-safe text encoding for upload payloads.
//!
//! The listing backend accepts images as base64 strings inside JSON. Two
//! paths exist:
//!
//! - [`encode_to_portable_text`]: re-encode decoded pixels as JPEG at a
//!   bounded quality, then base64. Used after normalization.
//! - [`file_to_portable_text`]: base64 the raw file bytes with no decode.
//!   Best-effort — failures are logged and yield an empty string, which the
//!   caller treats as "no data available".

use base64::{Engine as _, engine::general_purpose};
use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use std::path::Path;
use tracing::warn;

/// Quality setting for lossy transport encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Re-encode a decoded image as JPEG at `quality` and return it base64
/// encoded.
///
/// `None` is a no-op yielding an empty string, so callers holding an
/// optional bitmap can pass it straight through. An in-memory encode
/// failure (not reachable with the compiled-in codecs) is logged and also
/// yields an empty string.
pub fn encode_to_portable_text(image: Option<&DynamicImage>, quality: Quality) -> String {
    let Some(image) = image else {
        return String::new();
    };

    // JPEG has no alpha channel; flatten before encoding.
    let rgb = image.to_rgb8();
    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, quality.value());
    if let Err(e) = rgb.write_with_encoder(encoder) {
        warn!("JPEG transport encode failed: {e}");
        return String::new();
    }

    general_purpose::STANDARD.encode(&jpeg)
}

/// Base64-encode a file's raw bytes with no decode or re-encode.
///
/// Best-effort: any I/O failure is logged and yields an empty string rather
/// than propagating.
pub fn file_to_portable_text(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => general_purpose::STANDARD.encode(&bytes),
        Err(e) => {
            warn!(path = %path.display(), "reading image for transport failed: {e}");
            String::new()
        }
    }
}
