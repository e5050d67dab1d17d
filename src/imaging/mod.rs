//! Image normalization — pure Rust, no platform bitmap APIs.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Probe bounds** | `image::image_dimensions` |
//! | **Decode (JPEG, PNG, WebP)** | `image` crate (pure Rust decoders) |
//! | **Orientation** | `kamadak-exif` tag read + `DynamicImage::rotate*` |
//! | **Transport text** | JPEG re-encode + `base64` |
//!
//! The module is split into:
//! - **Sampling**: pure functions for downsample-factor math and pixel
//!   decimation (unit testable without I/O)
//! - **Orientation**: EXIF orientation tag read and the tag→rotation map
//! - **Normalizer**: high-level decode pipeline combining the above
//! - **Transport**: base64 text encoding for upload payloads

mod normalizer;
mod orientation;
mod sampling;
mod transport;

pub use normalizer::{
    DecodeError, NormalizeError, decode_downsampled, decode_from_stream, normalize,
    probe_dimensions,
};
pub use orientation::{MetadataError, apply_orientation, correct_orientation};
pub use sampling::{MAX_HEIGHT, MAX_WIDTH, compute_downsample_factor, decimate};
pub use transport::{Quality, encode_to_portable_text, file_to_portable_text};
