//! Domain types for place-description records and derived form fields.
//!
//! [`PlaceDescription`] mirrors the JSON shape produced by the external
//! map-autocomplete widget (snake_case field names on the wire). It is
//! immutable once received and consumed once per selection event.

use serde::{Deserialize, Serialize};

/// One labeled fragment of a normalized address, tagged with type labels
/// such as `"postal_town"`, `"postal_code"`, or `"neighborhood"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    pub types: Vec<String>,
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A place-description record from the autocomplete widget.
///
/// `address_components` may be absent on the wire; it deserializes as empty
/// in that case so the extractors stay total. Component order is whatever
/// the upstream source supplied — no canonical ordering is assumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDescription {
    pub name: String,
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    pub place_id: String,
    pub location: LatLng,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    /// Human-readable opening hours, one entry per weekday
    /// (e.g. `"Monday: 7:00 AM – 5:00 PM"`).
    #[serde(default)]
    pub weekday_text: Option<Vec<String>>,
}

/// Structured fields derived from a validated [`PlaceDescription`].
///
/// Held only long enough to populate the form-output port; missing data is
/// `None`, never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFields {
    pub name: String,
    pub address_line: String,
    pub postal_code: Option<String>,
    pub borough: Option<String>,
    pub place_gid: String,
    pub lat: f64,
    pub lng: f64,
    pub weekday_text: Option<Vec<String>>,
}
