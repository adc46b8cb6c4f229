//! City gate for selected places.
//!
//! Runs before any field extraction or picker rendering: a place whose
//! postal town is missing or different from the configured city is rejected
//! with a user-presentable reason and processing stops for that selection.

use thiserror::Error;

use crate::extract::postal_town;
use crate::place::PlaceDescription;

/// Why a selected place was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceRejection {
    /// The record carried no `"postal_town"` address component.
    #[error("please choose a different location — the selection has no postal town")]
    NoPostalTown,

    /// The postal town did not match the configured city (case-sensitive).
    #[error("location found in {postal_town}, not in the target city")]
    WrongCity { postal_town: String },
}

/// Checks that `place` resolves to `required_city`.
///
/// # Errors
///
/// Returns [`PlaceRejection::NoPostalTown`] if no postal-town component is
/// present, or [`PlaceRejection::WrongCity`] if it differs from
/// `required_city` (exact, case-sensitive comparison).
pub fn validate_city(
    place: &PlaceDescription,
    required_city: &str,
) -> Result<(), PlaceRejection> {
    match postal_town(place) {
        None => Err(PlaceRejection::NoPostalTown),
        Some(town) if town != required_city => Err(PlaceRejection::WrongCity {
            postal_town: town.to_owned(),
        }),
        Some(_) => Ok(()),
    }
}
