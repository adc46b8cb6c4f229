//! Thumbnail-selection state machine.
//!
//! Manages "which photo is selected" over a bounded candidate list. Place
//! identity is threaded through [`ThumbnailPicker::render`] and carried in
//! every [`SelectionChanged`] event, so consumers never read shared mutable
//! state to learn which place a selection belongs to.

/// Maximum number of photo candidates displayed per place.
pub const MAX_THUMBNAILS: usize = 6;

/// One selectable photo option derived from a place's photo references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailCandidate {
    pub url: String,
    /// Display position in `[0, MAX_THUMBNAILS)`.
    pub index: usize,
}

/// Emitted whenever the selected thumbnail changes (including the automatic
/// selection of candidate 0 on render). Consumed by the gateway to request
/// image persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    pub url: String,
    pub display_index: usize,
    pub place_name: String,
    pub place_id: String,
}

#[derive(Debug, Default)]
enum PickerState {
    #[default]
    Empty,
    Rendered {
        candidates: Vec<ThumbnailCandidate>,
        selected: usize,
        place_name: String,
        place_id: String,
    },
}

/// Finite-state picker over a place's photo URLs.
///
/// `Empty` until the first render; once `Rendered`, exactly one candidate is
/// selected at all times. Re-rendering fully discards prior state.
#[derive(Debug, Default)]
pub struct ThumbnailPicker {
    state: PickerState,
}

impl ThumbnailPicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the first `min(len, MAX_THUMBNAILS)` URLs as candidates and
    /// auto-selects the first, returning its [`SelectionChanged`] event.
    ///
    /// An empty URL list transitions back to `Empty` and returns `None`.
    /// Any previous candidates and selection are discarded.
    pub fn render(
        &mut self,
        photo_urls: &[String],
        place_name: &str,
        place_id: &str,
    ) -> Option<SelectionChanged> {
        if photo_urls.is_empty() {
            self.state = PickerState::Empty;
            return None;
        }

        let candidates: Vec<ThumbnailCandidate> = photo_urls
            .iter()
            .take(MAX_THUMBNAILS)
            .enumerate()
            .map(|(index, url)| ThumbnailCandidate {
                url: url.clone(),
                index,
            })
            .collect();

        let event = SelectionChanged {
            url: candidates[0].url.clone(),
            display_index: 0,
            place_name: place_name.to_owned(),
            place_id: place_id.to_owned(),
        };

        self.state = PickerState::Rendered {
            candidates,
            selected: 0,
            place_name: place_name.to_owned(),
            place_id: place_id.to_owned(),
        };

        Some(event)
    }

    /// Selects the candidate at `index` and returns its event.
    ///
    /// A no-op returning `None` when nothing is rendered or `index` is out
    /// of range (the UI should not offer such an index, but clicks are
    /// untrusted input).
    pub fn select(&mut self, index: usize) -> Option<SelectionChanged> {
        let PickerState::Rendered {
            candidates,
            selected,
            place_name,
            place_id,
        } = &mut self.state
        else {
            return None;
        };

        let candidate = candidates.get(index)?;
        *selected = index;
        Some(SelectionChanged {
            url: candidate.url.clone(),
            display_index: index,
            place_name: place_name.clone(),
            place_id: place_id.clone(),
        })
    }

    /// The currently rendered candidates, oldest-first; empty when `Empty`.
    #[must_use]
    pub fn candidates(&self) -> &[ThumbnailCandidate] {
        match &self.state {
            PickerState::Empty => &[],
            PickerState::Rendered { candidates, .. } => candidates,
        }
    }

    /// The selected candidate, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&ThumbnailCandidate> {
        match &self.state {
            PickerState::Empty => None,
            PickerState::Rendered {
                candidates,
                selected,
                ..
            } => candidates.get(*selected),
        }
    }

    /// URL of the selected candidate, if any. Used to drop stale
    /// image-persistence completions.
    #[must_use]
    pub fn selected_url(&self) -> Option<&str> {
        self.selected().map(|c| c.url.as_str())
    }
}
