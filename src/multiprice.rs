//! Multi-price field codec.
//!
//! The backend stores a listing's prices in a single string-typed field:
//! entries joined by an entry delimiter, value and unit joined by a unit
//! delimiter within each entry. `"10|sqm;;20|sqm2"` is two entries, ten per
//! square meter and twenty per alternate unit.
//!
//! ## Leniency
//!
//! Decoding never fails. A segment with extra unit-delimited parts keeps
//! only the first two; the rest are dropped. A segment with no unit
//! delimiter is a value with no unit. Trailing entry delimiters are
//! trimmed. This matches the wire format's historical behavior — the field
//! has no escaping, and downstream consumers depend on the truncation, so
//! it stays.

use serde::{Deserialize, Serialize};

/// Default separator between price entries.
pub const ENTRY_DELIMITER: &str = ";;";
/// Default separator between a price value and its unit name.
pub const UNIT_DELIMITER: &str = "|";
/// Separator for flat URL lists (cached listing image field).
pub const LIST_DELIMITER: &str = ",";
/// Human-readable separator used by the display rendering.
const DISPLAY_SEPARATOR: &str = ", ";

/// A single priced unit: a decimal value kept as a string, plus an optional
/// unit name. An empty unit means "no unit", not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub value: String,
    #[serde(default)]
    pub unit: String,
}

impl PriceEntry {
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }
}

/// Bidirectional converter between the wire string and ordered
/// [`PriceEntry`] lists.
///
/// Delimiters are configurable; [`Default`] uses the backend's constants.
/// Neither delimiter is escaped in values or unit names — a unit containing
/// the unit delimiter will not round-trip (documented limitation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiPriceCodec {
    pub entry_delimiter: String,
    pub unit_delimiter: String,
}

impl Default for MultiPriceCodec {
    fn default() -> Self {
        Self {
            entry_delimiter: ENTRY_DELIMITER.to_string(),
            unit_delimiter: UNIT_DELIMITER.to_string(),
        }
    }
}

impl MultiPriceCodec {
    /// Decode a wire string into an ordered entry list.
    ///
    /// Empty input is an empty list. Within a segment, part 0 is the value
    /// and part 1, if present, the unit name; further parts are ignored.
    pub fn decode(&self, s: &str) -> Vec<PriceEntry> {
        if s.is_empty() {
            return Vec::new();
        }

        let mut segments: Vec<&str> = s.split(self.entry_delimiter.as_str()).collect();
        // Trailing delimiters produce empty tail segments; trim them.
        while segments.last() == Some(&"") {
            segments.pop();
        }

        segments
            .into_iter()
            .map(|segment| {
                let mut parts = segment.split(self.unit_delimiter.as_str());
                let value = parts.next().unwrap_or("").to_string();
                let unit = parts.next().unwrap_or("").to_string();
                PriceEntry { value, unit }
            })
            .collect()
    }

    /// Encode an entry list into the wire string.
    ///
    /// The unit segment is always emitted, even when empty, so
    /// `decode(encode(entries)) == entries` holds for delimiter-free input.
    pub fn encode(&self, entries: &[PriceEntry]) -> String {
        let mut out = String::new();
        for entry in entries {
            out.push_str(&self.entry_delimiter);
            out.push_str(&entry.value);
            out.push_str(&self.unit_delimiter);
            out.push_str(&entry.unit);
        }
        // Strip the single leading entry delimiter.
        if !out.is_empty() {
            out.split_off(self.entry_delimiter.len())
        } else {
            out
        }
    }

    /// Render an entry list for presentation, entries separated by `", "`.
    ///
    /// One-way: the display separator is not a delimiter and the result is
    /// not meant to be decoded back.
    pub fn encode_for_display(&self, entries: &[PriceEntry]) -> String {
        self.encode(entries)
            .replace(&self.entry_delimiter, DISPLAY_SEPARATOR)
    }
}

/// Split a flat delimited URL list (cached listing image field).
///
/// Empty input yields an empty list.
pub fn split_url_list(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(LIST_DELIMITER).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> MultiPriceCodec {
        MultiPriceCodec::default()
    }

    #[test]
    fn decode_empty_string_is_empty_list() {
        assert!(codec().decode("").is_empty());
    }

    #[test]
    fn encode_empty_list_is_empty_string() {
        assert_eq!(codec().encode(&[]), "");
    }

    #[test]
    fn decode_two_entries_with_units() {
        let entries = codec().decode("10|sqm;;20|sqm2");
        assert_eq!(
            entries,
            vec![PriceEntry::new("10", "sqm"), PriceEntry::new("20", "sqm2")]
        );
    }

    #[test]
    fn encode_reproduces_wire_string() {
        let entries = vec![PriceEntry::new("10", "sqm"), PriceEntry::new("20", "sqm2")];
        assert_eq!(codec().encode(&entries), "10|sqm;;20|sqm2");
    }

    #[test]
    fn decode_value_without_unit() {
        assert_eq!(codec().decode("10"), vec![PriceEntry::new("10", "")]);
    }

    #[test]
    fn decode_value_with_empty_unit_segment() {
        assert_eq!(codec().decode("10|"), vec![PriceEntry::new("10", "")]);
    }

    #[test]
    fn malformed_segment_truncates_to_two_parts() {
        // Extra unit-delimited parts are dropped, not merged into the unit
        assert_eq!(codec().decode("10|sqm|extra"), vec![PriceEntry::new("10", "sqm")]);
    }

    #[test]
    fn trailing_entry_delimiter_is_trimmed() {
        assert_eq!(codec().decode("10|sqm;;"), vec![PriceEntry::new("10", "sqm")]);
        assert_eq!(codec().decode("10|sqm;;;;"), vec![PriceEntry::new("10", "sqm")]);
    }

    #[test]
    fn interior_empty_segment_is_kept() {
        // Only trailing empties are trimmed; an interior one is a real
        // (empty-valued) entry on the wire
        let entries = codec().decode("10|sqm;;;;20|sqm2");
        assert_eq!(
            entries,
            vec![
                PriceEntry::new("10", "sqm"),
                PriceEntry::new("", ""),
                PriceEntry::new("20", "sqm2"),
            ]
        );
    }

    #[test]
    fn round_trip_preserves_entries() {
        let entries = vec![
            PriceEntry::new("10", "sqm"),
            PriceEntry::new("7.50", ""),
            PriceEntry::new("1200", "month"),
        ];
        let wire = codec().encode(&entries);
        assert_eq!(codec().decode(&wire), entries);
    }

    #[test]
    fn display_uses_readable_separator() {
        let entries = vec![PriceEntry::new("10", "sqm"), PriceEntry::new("20", "sqm2")];
        assert_eq!(codec().encode_for_display(&entries), "10|sqm, 20|sqm2");
    }

    #[test]
    fn custom_delimiters() {
        let codec = MultiPriceCodec {
            entry_delimiter: "##".to_string(),
            unit_delimiter: "@".to_string(),
        };
        let entries = codec.decode("5@day##40@week");
        assert_eq!(
            entries,
            vec![PriceEntry::new("5", "day"), PriceEntry::new("40", "week")]
        );
        assert_eq!(codec.encode(&entries), "5@day##40@week");
    }

    #[test]
    fn url_list_splits_on_list_delimiter() {
        assert_eq!(
            split_url_list("http://a/1.jpg,http://a/2.jpg"),
            vec!["http://a/1.jpg".to_string(), "http://a/2.jpg".to_string()]
        );
    }

    #[test]
    fn url_list_empty_input_is_empty() {
        assert!(split_url_list("").is_empty());
    }
}
