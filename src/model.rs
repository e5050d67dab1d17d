//! Record types mirroring the CMS node schema.
//!
//! Three shapes of the same listing exist in the application:
//!
//! - [`Listing`] — a published node as the backend serves it, with the
//!   `field_…` attribute names of the content type.
//! - [`ListingDraft`] — the payload posted to create a node: taxonomy
//!   references, an address, base64 image payloads (see
//!   [`crate::imaging::file_to_portable_text`]), and structured prices.
//! - [`CachedListing`] — the flat row kept in the device cache, with the
//!   multi-price and image-URL fields still in their delimited string
//!   forms. Accessors decode them on demand.
//!
//! Every wire name is declared with a serde attribute on a flat struct.

use crate::multiprice::{MultiPriceCodec, PriceEntry, split_url_list};
use serde::{Deserialize, Serialize};

/// Body text of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    pub value: String,
}

/// Geographic address of a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub latitude: f64,
    pub longitude: f64,
}

/// Availability flag of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub enabled: i32,
}

/// Reference to a taxonomy term or list-field option by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRef {
    pub id: String,
}

/// A published listing node as served by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub nid: u32,
    pub title: String,
    #[serde(default)]
    pub body: Vec<Body>,
    #[serde(rename = "field_multiprice", default)]
    pub prices: Vec<PriceEntry>,
    #[serde(rename = "field_availability", default)]
    pub availability: Vec<Availability>,
    #[serde(rename = "field_image", default)]
    pub images: Vec<String>,
    #[serde(rename = "field_address", default)]
    pub address: Vec<Address>,
}

/// Payload for creating a new listing node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub body: Body,
    #[serde(rename = "type")]
    pub node_type: String,
    pub author: TermRef,
    #[serde(rename = "field_type")]
    pub listing_type: TermRef,
    #[serde(rename = "field_cultivation", default)]
    pub cultivation: Vec<TermRef>,
    #[serde(rename = "field_address")]
    pub address: Address,
    /// Base64 transport payloads, one per attached image.
    #[serde(rename = "field_image", default)]
    pub images: Vec<String>,
    #[serde(rename = "field_multiprice", default)]
    pub prices: Vec<PriceEntry>,
}

/// A listing row from the device cache.
///
/// The multi-value fields stay in their delimited wire forms; decoding
/// happens on access so the cache layer never needs the codec.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CachedListing {
    pub nid: u32,
    pub title: String,
    pub body: String,
    pub coordinates: [f64; 2],
    /// List-delimited image URLs.
    pub images: String,
    /// Encoded multi-price field.
    pub multiprice: String,
}

impl CachedListing {
    /// Decode the multi-price field with the given codec.
    pub fn prices(&self, codec: &MultiPriceCodec) -> Vec<PriceEntry> {
        codec.decode(&self.multiprice)
    }

    /// Split the image field into individual URLs.
    pub fn image_urls(&self) -> Vec<String> {
        split_url_list(&self.images)
    }

    /// Rehydrate a full [`Listing`] from the cached row.
    ///
    /// Cached rows are only written for available listings, so the
    /// availability flag comes back enabled.
    pub fn to_listing(&self, codec: &MultiPriceCodec) -> Listing {
        Listing {
            nid: self.nid,
            title: self.title.clone(),
            body: vec![Body {
                value: self.body.clone(),
            }],
            prices: self.prices(codec),
            availability: vec![Availability { enabled: 1 }],
            images: self.image_urls(),
            address: vec![Address {
                latitude: self.coordinates[0],
                longitude: self.coordinates[1],
            }],
        }
    }
}
