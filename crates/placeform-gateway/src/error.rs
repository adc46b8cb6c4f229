use thiserror::Error;

/// Errors returned by the backend gateway client.
///
/// Every variant is non-fatal to the page session: callers log it, surface
/// a minimal message, and never retry automatically.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The base URL supplied at construction was not parseable.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
