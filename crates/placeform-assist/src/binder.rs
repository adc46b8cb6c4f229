//! Output-port abstraction over the host page's form fields.
//!
//! The extraction, validation, and picker logic never touches a rendered
//! page; everything flows through [`FormOutputPort::set_field`], keyed by
//! [`FormField`]. The field identifiers are an external contract with the
//! host page template.

use std::collections::HashMap;

use placeform_core::hours::format_opening_hours;
use placeform_core::place::ExtractedFields;

/// The named output fields of the suggestion form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    AddressLine,
    PostalCode,
    PlaceGid,
    Lat,
    Lng,
    Borough,
    WeekdayText,
    /// URL of the currently selected thumbnail.
    ImageUrl,
    /// Server-side path returned by image persistence.
    ImagePath,
}

impl FormField {
    /// The host-page element identifier this field binds to.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            FormField::Name => "place_name",
            FormField::AddressLine => "place_location_address",
            FormField::PostalCode => "place_location_postal_code",
            FormField::PlaceGid => "place_google_place_gid",
            FormField::Lat => "place_location_lat",
            FormField::Lng => "place_location_lng",
            FormField::Borough => "place_borough",
            FormField::WeekdayText => "place_weekday_text",
            FormField::ImageUrl => "place_img_url",
            FormField::ImagePath => "place_img_path",
        }
    }
}

/// Sink for derived form values. Implemented by the host page adapter; the
/// library ships [`MemoryForm`] for headless use and tests.
pub trait FormOutputPort {
    fn set_field(&mut self, field: FormField, value: &str);
}

/// Writes every derived value for a validated place to the port.
///
/// `None` values (missing borough or postcode) are skipped rather than
/// written as empty strings. Weekday text is bound in its formatted,
/// abbreviated form.
pub fn bind_fields<P: FormOutputPort>(port: &mut P, fields: &ExtractedFields) {
    port.set_field(FormField::Name, &fields.name);
    port.set_field(FormField::AddressLine, &fields.address_line);
    port.set_field(FormField::PlaceGid, &fields.place_gid);
    port.set_field(FormField::Lat, &fields.lat.to_string());
    port.set_field(FormField::Lng, &fields.lng.to_string());
    if let Some(postal_code) = &fields.postal_code {
        port.set_field(FormField::PostalCode, postal_code);
    }
    if let Some(borough) = &fields.borough {
        port.set_field(FormField::Borough, borough);
    }
    if let Some(weekday_text) = &fields.weekday_text {
        let formatted = format_opening_hours(weekday_text)
            .into_iter()
            .map(|(day, hours)| format!("{day}: {hours}"))
            .collect::<Vec<_>>()
            .join(", ");
        port.set_field(FormField::WeekdayText, &formatted);
    }
}

/// In-memory [`FormOutputPort`] keeping the latest value per field.
#[derive(Debug, Default)]
pub struct MemoryForm {
    values: HashMap<FormField, String>,
}

impl MemoryForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FormOutputPort for MemoryForm {
    fn set_field(&mut self, field: FormField, value: &str) {
        self.values.insert(field, value.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> ExtractedFields {
        ExtractedFields {
            name: "Monmouth Coffee".to_owned(),
            address_line: "27 Monmouth St".to_owned(),
            postal_code: Some("WC2H 9EU".to_owned()),
            borough: Some("Seven Dials".to_owned()),
            place_gid: "ChIJabc".to_owned(),
            lat: 51.5142,
            lng: -0.127,
            weekday_text: Some(vec!["Monday: 8:00 AM – 5:00 PM".to_owned()]),
        }
    }

    #[test]
    fn binds_all_present_fields() {
        let mut form = MemoryForm::new();
        bind_fields(&mut form, &fields());

        assert_eq!(form.get(FormField::Name), Some("Monmouth Coffee"));
        assert_eq!(form.get(FormField::AddressLine), Some("27 Monmouth St"));
        assert_eq!(form.get(FormField::PostalCode), Some("WC2H 9EU"));
        assert_eq!(form.get(FormField::Borough), Some("Seven Dials"));
        assert_eq!(form.get(FormField::PlaceGid), Some("ChIJabc"));
        assert_eq!(form.get(FormField::Lat), Some("51.5142"));
        assert_eq!(form.get(FormField::Lng), Some("-0.127"));
        assert_eq!(form.get(FormField::WeekdayText), Some("Mon: 08:00 – 17:00"));
    }

    #[test]
    fn missing_optionals_are_skipped() {
        let mut form = MemoryForm::new();
        let mut f = fields();
        f.postal_code = None;
        f.borough = None;
        f.weekday_text = None;
        bind_fields(&mut form, &f);

        assert!(form.get(FormField::PostalCode).is_none());
        assert!(form.get(FormField::Borough).is_none());
        assert!(form.get(FormField::WeekdayText).is_none());
        assert_eq!(form.get(FormField::Name), Some("Monmouth Coffee"));
    }

    #[test]
    fn field_ids_match_the_page_contract() {
        assert_eq!(FormField::Name.id(), "place_name");
        assert_eq!(FormField::PlaceGid.id(), "place_google_place_gid");
        assert_eq!(FormField::ImageUrl.id(), "place_img_url");
    }

    #[test]
    fn memory_form_keeps_latest_value() {
        let mut form = MemoryForm::new();
        form.set_field(FormField::ImageUrl, "a.jpg");
        form.set_field(FormField::ImageUrl, "b.jpg");
        assert_eq!(form.get(FormField::ImageUrl), Some("b.jpg"));
    }
}
