//! Orchestration of the two user-driven events: place selection and
//! thumbnail click.
//!
//! Single-threaded and event-driven; every failure past validation is
//! non-fatal. Gateway errors are logged and downgraded to notices so the
//! user can recover by re-selecting a place or re-clicking a thumbnail.

use placeform_core::extract::extract_fields;
use placeform_core::place::PlaceDescription;
use placeform_core::validate::{validate_city, PlaceRejection};
use placeform_gateway::{DuplicateCheck, GatewayClient, StoredImage};

use crate::binder::{bind_fields, FormField, FormOutputPort};
use crate::picker::{SelectionChanged, ThumbnailPicker};

/// Result of handling an autocomplete selection.
#[derive(Debug)]
pub enum PlaceOutcome {
    /// The place failed the city gate; nothing was bound or rendered.
    Rejected(PlaceRejection),
    /// Fields were bound and the picker rendered. `duplicate` is `None`
    /// when the duplicate check itself failed; any gateway failures are
    /// reported in `notices`.
    Accepted {
        duplicate: Option<DuplicateCheck>,
        notices: Vec<String>,
    },
}

/// Result of handling a thumbnail click.
#[derive(Debug, PartialEq, Eq)]
pub enum ThumbnailOutcome {
    /// Out-of-range index, nothing rendered, or a stale completion.
    Ignored,
    /// The image was persisted server-side at `path`.
    Stored { path: String },
    /// Persistence failed; the selection stays as clicked.
    Failed { message: String },
}

/// Drives one suggestion page session: holds the picker state and the
/// configured target city, and calls the backend through `gateway`.
pub struct SuggestSession<'a> {
    city_name: String,
    gateway: &'a GatewayClient,
    picker: ThumbnailPicker,
}

impl<'a> SuggestSession<'a> {
    #[must_use]
    pub fn new(city_name: impl Into<String>, gateway: &'a GatewayClient) -> Self {
        Self {
            city_name: city_name.into(),
            gateway,
            picker: ThumbnailPicker::new(),
        }
    }

    #[must_use]
    pub fn picker(&self) -> &ThumbnailPicker {
        &self.picker
    }

    /// Handles an autocomplete selection event.
    ///
    /// Validation gates everything: a rejected place binds no fields and
    /// leaves the picker untouched. For an accepted place the derived
    /// fields are bound, the photo grid is rendered (auto-selecting the
    /// first thumbnail and persisting it), and the duplicate check runs
    /// last.
    pub async fn place_selected<P: FormOutputPort>(
        &mut self,
        place: &PlaceDescription,
        port: &mut P,
    ) -> PlaceOutcome {
        if let Err(rejection) = validate_city(place, &self.city_name) {
            tracing::debug!(place = %place.name, %rejection, "place selection rejected");
            return PlaceOutcome::Rejected(rejection);
        }

        let fields = extract_fields(place, &self.city_name);
        bind_fields(port, &fields);

        let mut notices = Vec::new();

        if let Some(event) = self
            .picker
            .render(&place.photo_urls, &place.name, &place.place_id)
        {
            port.set_field(FormField::ImageUrl, &event.url);
            if let ThumbnailOutcome::Failed { message } =
                self.persist_selection(&event, port).await
            {
                notices.push(message);
            }
        }

        let duplicate = match self.gateway.check_existing(&place.place_id).await {
            Ok(check) => Some(check),
            Err(error) => {
                tracing::warn!(%error, place_id = %place.place_id, "duplicate check failed");
                notices.push("could not check for an existing entry".to_owned());
                None
            }
        };

        PlaceOutcome::Accepted { duplicate, notices }
    }

    /// Handles a click on the thumbnail at `index`.
    ///
    /// Out-of-range clicks (or clicks before any render) are ignored. A
    /// real selection binds the image URL, requests server-side
    /// persistence, and binds the stored path on success.
    pub async fn thumbnail_clicked<P: FormOutputPort>(
        &mut self,
        index: usize,
        port: &mut P,
    ) -> ThumbnailOutcome {
        let Some(event) = self.picker.select(index) else {
            tracing::debug!(index, "thumbnail click ignored");
            return ThumbnailOutcome::Ignored;
        };

        port.set_field(FormField::ImageUrl, &event.url);
        self.persist_selection(&event, port).await
    }

    /// Requests persistence for a selection event and binds the stored path.
    async fn persist_selection<P: FormOutputPort>(
        &self,
        event: &SelectionChanged,
        port: &mut P,
    ) -> ThumbnailOutcome {
        match self
            .gateway
            .persist_image(&event.url, &event.place_name, &event.place_id)
            .await
        {
            Ok(stored) => self.apply_persisted(event, stored, port),
            Err(error) => {
                tracing::warn!(%error, url = %event.url, "image persistence failed");
                ThumbnailOutcome::Failed {
                    message: error.to_string(),
                }
            }
        }
    }

    /// Binds the stored path for a completed persistence request.
    ///
    /// A completion may re-enter after the user has moved on (a newer
    /// render or selection); if its URL no longer matches the current
    /// selection it is stale and dropped without touching the form.
    fn apply_persisted<P: FormOutputPort>(
        &self,
        event: &SelectionChanged,
        stored: StoredImage,
        port: &mut P,
    ) -> ThumbnailOutcome {
        if self.picker.selected_url() != Some(event.url.as_str()) {
            tracing::debug!(url = %event.url, "stale image persistence result dropped");
            return ThumbnailOutcome::Ignored;
        }
        tracing::debug!(url = %event.url, path = %stored.path, "image persisted");
        port.set_field(FormField::ImagePath, &stored.path);
        ThumbnailOutcome::Stored { path: stored.path }
    }
}
