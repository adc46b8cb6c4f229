//! HTTP client for the suggestion backend.
//!
//! Wraps `reqwest` with typed response deserialization for the two
//! endpoints the form assistant calls: the duplicate check and the
//! server-side image download. The backend is an opaque service; nothing
//! here retries or interprets its persistence semantics.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::GatewayError;
use crate::types::{DuplicateCheck, StoredImage};

/// Client for the suggestion backend.
///
/// Holds the HTTP client and backend origin. Point `base_url` at a mock
/// server in tests.
pub struct GatewayClient {
    client: Client,
    base_url: Url,
}

impl GatewayClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`GatewayError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: exactly one trailing slash so `Url::join` appends
        // endpoint paths rather than replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GatewayError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Asks the backend whether a place is already in the database.
    ///
    /// Calls `GET /api/check_cafe?place_id=...`.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GatewayError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn check_existing(&self, place_id: &str) -> Result<DuplicateCheck, GatewayError> {
        let url = self.build_url("api/check_cafe", &[("place_id", place_id)]);
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GatewayError::Deserialize {
            context: format!("check_existing(place_id={place_id})"),
            source: e,
        })
    }

    /// Asks the backend to download and store an image.
    ///
    /// Calls `POST /download_image` with JSON `{url, name, id}` and returns
    /// the stored path. Called once per thumbnail-selection event; failures
    /// are for the caller to log, never to retry.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GatewayError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn persist_image(
        &self,
        url: &str,
        name: &str,
        id: &str,
    ) -> Result<StoredImage, GatewayError> {
        let endpoint = self.build_url("download_image", &[]);
        let body = serde_json::json!({ "url": url, "name": name, "id": id });
        let response = self.client.post(endpoint).json(&body).send().await?;
        let response = response.error_for_status()?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| GatewayError::Deserialize {
            context: format!("persist_image(name={name})"),
            source: e,
        })
    }

    /// Builds the full request URL with percent-encoded query parameters.
    ///
    /// Joins `path` onto the base URL, so a path prefix in the configured
    /// backend origin is preserved.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self
            .base_url
            .join(path)
            .expect("valid relative endpoint path");
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }
}
