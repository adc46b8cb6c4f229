pub mod config;
pub mod error;
pub mod extract;
pub mod hours;
pub mod place;
pub mod validate;

pub use config::{load_config, AssistConfig};
pub use error::ConfigError;
pub use extract::extract_fields;
pub use place::{AddressComponent, ExtractedFields, LatLng, PlaceDescription};
pub use validate::{validate_city, PlaceRejection};
