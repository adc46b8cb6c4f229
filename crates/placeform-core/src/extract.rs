//! Pure extractors deriving structured form fields from a place record.
//!
//! All functions here are total: missing data comes back as `None` or the
//! input unchanged, never as an error. Component scans return the *first*
//! match in upstream order.

use std::sync::LazyLock;

use regex::Regex;

use crate::place::{ExtractedFields, PlaceDescription};

/// UK postcode: one or two letters, a digit or `R`, an optional
/// alphanumeric, an optional space, a digit, two letters.
const UK_POSTCODE: &str = "[A-Z]{1,2}[0-9R][0-9A-Z]? ?[0-9][A-Z]{2}";

/// Whitespace then a postcode, anchored at the position right after the
/// city name. Compiled once; the city itself is matched as a literal.
static POSTCODE_AFTER_CITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^\\s+{UK_POSTCODE}")).expect("valid postcode regex")
});

/// Derives a URL-safe slug from a display name.
///
/// Lowercases, replaces each space with a dash, then strips every character
/// that is not ASCII-alphanumeric, `_`, or `-`. Empty input yields empty
/// output.
#[must_use]
pub fn generate_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Returns the first address component carrying any of the given type labels.
fn first_component_of_type<'a>(
    place: &'a PlaceDescription,
    wanted: &[&str],
) -> Option<&'a str> {
    place
        .address_components
        .iter()
        .find(|c| c.types.iter().any(|t| wanted.contains(&t.as_str())))
        .map(|c| c.long_name.as_str())
}

/// The borough, taken from the first `"sublocality"` or `"neighborhood"`
/// component. `None` if no component matches.
#[must_use]
pub fn borough(place: &PlaceDescription) -> Option<&str> {
    first_component_of_type(place, &["sublocality", "neighborhood"])
}

/// The postal town, from the first `"postal_town"` component.
#[must_use]
pub fn postal_town(place: &PlaceDescription) -> Option<&str> {
    first_component_of_type(place, &["postal_town"])
}

/// The postcode, from the first `"postal_code"` component.
#[must_use]
pub fn postcode(place: &PlaceDescription) -> Option<&str> {
    first_component_of_type(place, &["postal_code"])
}

/// Returns the part of `address` before `", <city> <postcode>"`, trimmed of
/// trailing whitespace. If the city-plus-postcode tail is not found, the
/// address is returned unchanged.
#[must_use]
pub fn address_before_city_postcode<'a>(address: &'a str, city: &str) -> &'a str {
    let needle = format!(", {city}");
    let mut search_from = 0;
    // Try every occurrence of ", <city>": only one directly followed by a
    // postcode marks the tail to strip. The comma anchor is ASCII, so
    // advancing one byte past it stays on a char boundary.
    while let Some(rel_pos) = address[search_from..].find(&needle) {
        let start = search_from + rel_pos;
        let after = start + needle.len();
        if POSTCODE_AFTER_CITY.is_match(&address[after..]) {
            return address[..start].trim_end();
        }
        search_from = start + 1;
    }
    address
}

/// Assembles the full set of derived fields for a place.
///
/// `city` is the configured target city, used only to locate the
/// city-plus-postcode tail in the formatted address.
#[must_use]
pub fn extract_fields(place: &PlaceDescription, city: &str) -> ExtractedFields {
    ExtractedFields {
        name: place.name.clone(),
        address_line: address_before_city_postcode(&place.formatted_address, city).to_owned(),
        postal_code: postcode(place).map(str::to_owned),
        borough: borough(place).map(str::to_owned),
        place_gid: place.place_id.clone(),
        lat: place.location.lat,
        lng: place.location.lng,
        weekday_text: place.weekday_text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::{AddressComponent, LatLng};

    fn component(long_name: &str, types: &[&str]) -> AddressComponent {
        AddressComponent {
            long_name: long_name.to_owned(),
            types: types.iter().map(|t| (*t).to_owned()).collect(),
        }
    }

    fn make_place(components: Vec<AddressComponent>) -> PlaceDescription {
        PlaceDescription {
            name: "Monmouth Coffee".to_owned(),
            formatted_address: "27 Monmouth St, London WC2H 9EU".to_owned(),
            address_components: components,
            place_id: "ChIJd8BlQ2BZwokRAFUEcm_qrcA".to_owned(),
            location: LatLng {
                lat: 51.5142,
                lng: -0.1270,
            },
            photo_urls: vec![],
            weekday_text: None,
        }
    }

    // -----------------------------------------------------------------------
    // generate_slug
    // -----------------------------------------------------------------------

    #[test]
    fn slug_lowercases_and_dashes_spaces() {
        assert_eq!(generate_slug("Monmouth Coffee"), "monmouth-coffee");
    }

    #[test]
    fn slug_strips_non_word_characters() {
        assert_eq!(generate_slug("Café De Paris!"), "caf-de-paris");
    }

    #[test]
    fn slug_keeps_underscores_and_digits() {
        assert_eq!(generate_slug("Unit_7 Cafe"), "unit_7-cafe");
    }

    #[test]
    fn slug_of_empty_is_empty() {
        assert_eq!(generate_slug(""), "");
    }

    #[test]
    fn slug_dashes_each_space_individually() {
        // Consecutive spaces each become a dash, matching the original rule.
        assert_eq!(generate_slug("a  b"), "a--b");
    }

    // -----------------------------------------------------------------------
    // component scans
    // -----------------------------------------------------------------------

    #[test]
    fn borough_matches_neighborhood() {
        let place = make_place(vec![component("Shoreditch", &["neighborhood"])]);
        assert_eq!(borough(&place), Some("Shoreditch"));
    }

    #[test]
    fn borough_matches_sublocality() {
        let place = make_place(vec![component("Hackney", &["sublocality", "political"])]);
        assert_eq!(borough(&place), Some("Hackney"));
    }

    #[test]
    fn borough_none_when_no_match() {
        let place = make_place(vec![component("London", &["postal_town"])]);
        assert_eq!(borough(&place), None);
    }

    #[test]
    fn borough_none_when_components_empty() {
        let place = make_place(vec![]);
        assert_eq!(borough(&place), None);
    }

    #[test]
    fn borough_returns_first_match() {
        let place = make_place(vec![
            component("Soho", &["neighborhood"]),
            component("Covent Garden", &["neighborhood"]),
        ]);
        assert_eq!(borough(&place), Some("Soho"));
    }

    #[test]
    fn postal_town_found() {
        let place = make_place(vec![
            component("Seven Dials", &["neighborhood"]),
            component("London", &["postal_town"]),
        ]);
        assert_eq!(postal_town(&place), Some("London"));
    }

    #[test]
    fn postal_town_none_when_absent() {
        let place = make_place(vec![component("Seven Dials", &["neighborhood"])]);
        assert_eq!(postal_town(&place), None);
    }

    #[test]
    fn postcode_found() {
        let place = make_place(vec![component("WC2H 9EU", &["postal_code"])]);
        assert_eq!(postcode(&place), Some("WC2H 9EU"));
    }

    #[test]
    fn postcode_is_idempotent() {
        let place = make_place(vec![component("WC2H 9EU", &["postal_code"])]);
        assert_eq!(postcode(&place), postcode(&place));
    }

    // -----------------------------------------------------------------------
    // address_before_city_postcode
    // -----------------------------------------------------------------------

    #[test]
    fn address_strips_city_and_postcode_tail() {
        assert_eq!(
            address_before_city_postcode("10 Downing St, London SW1A 2AA", "London"),
            "10 Downing St"
        );
    }

    #[test]
    fn address_without_postcode_returned_unchanged() {
        assert_eq!(
            address_before_city_postcode("10 Downing St, London", "London"),
            "10 Downing St, London"
        );
    }

    #[test]
    fn address_with_other_city_returned_unchanged() {
        assert_eq!(
            address_before_city_postcode("1 Deansgate, Manchester M3 1AZ", "London"),
            "1 Deansgate, Manchester M3 1AZ"
        );
    }

    #[test]
    fn address_handles_compact_postcode() {
        // No space inside the postcode; the pattern's space is optional.
        assert_eq!(
            address_before_city_postcode("27 Monmouth St, London WC2H9EU", "London"),
            "27 Monmouth St"
        );
    }

    #[test]
    fn address_city_with_punctuation_matches_literally() {
        // A city name containing regex metacharacters is still a plain
        // literal to the matcher.
        assert_eq!(
            address_before_city_postcode("1 High St, St. Albans AL1 1AA", "St. Albans"),
            "1 High St"
        );
    }

    #[test]
    fn address_skips_city_mention_without_postcode() {
        // The first ", London" has no postcode after it; the second does.
        assert_eq!(
            address_before_city_postcode("Cafe, London Place, London SW1A 2AA", "London"),
            "Cafe, London Place"
        );
    }

    // -----------------------------------------------------------------------
    // extract_fields
    // -----------------------------------------------------------------------

    #[test]
    fn extract_fields_assembles_all_derived_values() {
        let place = make_place(vec![
            component("Seven Dials", &["neighborhood"]),
            component("London", &["postal_town"]),
            component("WC2H 9EU", &["postal_code"]),
        ]);
        let fields = extract_fields(&place, "London");
        assert_eq!(fields.name, "Monmouth Coffee");
        assert_eq!(fields.address_line, "27 Monmouth St");
        assert_eq!(fields.postal_code.as_deref(), Some("WC2H 9EU"));
        assert_eq!(fields.borough.as_deref(), Some("Seven Dials"));
        assert_eq!(fields.place_gid, "ChIJd8BlQ2BZwokRAFUEcm_qrcA");
        assert!((fields.lat - 51.5142).abs() < f64::EPSILON);
        assert!((fields.lng + 0.1270).abs() < f64::EPSILON);
    }
}
