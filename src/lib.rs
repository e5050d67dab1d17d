//! # Listing Core
//!
//! The algorithmic core of a real-estate/equipment listing client: image
//! normalization for memory-constrained display and upload, and the
//! delimited-string codec used by the backend's multi-value fields.
//!
//! The surrounding application (screens, HTTP client, local cache) is a thin
//! layer of glue over platform APIs and lives elsewhere. This crate owns the
//! two places where actual data transformation happens, plus the record types
//! those transformations flow through.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Bounded-size, upright decode of source images; base64 transport encoding |
//! | [`multiprice`] | Multi-price field codec: delimited string ⇄ ordered (value, unit) pairs |
//! | [`model`] | Serializable record types mirroring the CMS node schema |
//!
//! # Design Decisions
//!
//! ## Strict Images, Lenient Strings
//!
//! Image decode and metadata failures surface as typed errors
//! ([`imaging::DecodeError`], [`imaging::MetadataError`]) — the caller decides
//! whether a broken photo aborts an upload. String parsing never fails: the
//! multi-price codec truncates malformed segments and always returns a result,
//! because the wire format has no escaping and downstream compatibility
//! matters more than strictness. One deliberate exception:
//! [`imaging::file_to_portable_text`] downgrades I/O failures to a logged
//! warning and an empty string, since its caller treats empty as "no data".
//!
//! ## Caller-Owned Buffers
//!
//! Decoded images are plain [`image::DynamicImage`] values. Transforms that
//! supersede a buffer (rotation, decimation) take their input by value, so the
//! old pixel data drops at the call boundary instead of lingering — peak
//! memory stays bounded on small devices.
//!
//! ## Explicit Field Mappings
//!
//! The [`model`] types declare their wire names (`field_multiprice`,
//! `field_image`, …) with serde attributes rather than deriving them from an
//! inheritance hierarchy. Flat structs, no reflection, no base-class
//! polymorphism.

pub mod imaging;
pub mod model;
pub mod multiprice;
