//! Wire types for the backend's duplicate-check and image-persist endpoints.

use serde::Deserialize;

/// Response of `GET /api/check_cafe?place_id=...`.
///
/// When `exists` is false the backend omits the remaining fields.
#[derive(Debug, Clone, Deserialize)]
pub struct DuplicateCheck {
    pub exists: bool,
    #[serde(default)]
    pub id: Option<i64>,
    /// Slug of the borough page the existing entry lives under.
    #[serde(default)]
    pub location_slug: Option<String>,
    #[serde(default)]
    pub cafe_slug: Option<String>,
}

/// Response of `POST /download_image`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredImage {
    /// Server-side path the image was written to.
    pub path: String,
    pub message: String,
}
