//! Environment-based configuration for the form-assistance library.

use crate::error::ConfigError;

/// Runtime configuration shared by the gateway and session layers.
#[derive(Debug, Clone)]
pub struct AssistConfig {
    /// City a selected place must resolve to (postal town match).
    pub city_name: String,
    /// Origin of the backend serving the duplicate-check and image-persist
    /// endpoints.
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

/// Load configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_config() -> Result<AssistConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load configuration from environment variables already in the process.
///
/// Unlike [`load_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_config_from_env() -> Result<AssistConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_config<F>(lookup: F) -> Result<AssistConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url = require("PLACEFORM_API_BASE_URL")?;
    let city_name = or_default("PLACEFORM_CITY_NAME", "London");
    let request_timeout_secs = parse_u64("PLACEFORM_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PLACEFORM_USER_AGENT", "placeform/0.1 (suggest-assist)");
    let log_level = or_default("PLACEFORM_LOG_LEVEL", "info");

    Ok(AssistConfig {
        city_name,
        api_base_url,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}
