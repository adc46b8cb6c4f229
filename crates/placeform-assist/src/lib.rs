pub mod binder;
pub mod picker;
pub mod session;

pub use binder::{bind_fields, FormField, FormOutputPort, MemoryForm};
pub use picker::{SelectionChanged, ThumbnailCandidate, ThumbnailPicker, MAX_THUMBNAILS};
pub use session::{PlaceOutcome, SuggestSession, ThumbnailOutcome};
