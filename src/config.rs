use std::{env, time::Duration};

use tracing::debug;

// wttr.in base URL, overridable through `WTTR_ENDPOINT`
const WTTR_ENDPOINT: &str = "https://wttr.in";
const ENDPOINT_ENV: &str = "WTTR_ENDPOINT";

const LOCATION: &str = "Batna,Algeria";
const DISPLAY_NAME: &str = "Batna, Algeria";
const LANGUAGE: &str = "en";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Compiled-in request parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the wttr.in service, without a trailing slash
    pub endpoint: String,
    /// Location string sent to the service, e.g. "Batna,Algeria"
    pub location: String,
    /// Human readable location shown in the tooltip header
    pub display_name: String,
    /// Language code passed as `lang`
    pub language: String,
    /// Hard ceiling for the whole request
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: WTTR_ENDPOINT.to_string(),
            location: LOCATION.to_string(),
            display_name: DISPLAY_NAME.to_string(),
            language: LANGUAGE.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    /// Defaults, with the base URL taken from `WTTR_ENDPOINT` when it is set and non-empty.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = env::var(ENDPOINT_ENV).ok().filter(|v| !v.trim().is_empty()) {
            debug!("Using endpoint override from {}: {}", ENDPOINT_ENV, endpoint);
            config.endpoint = endpoint;
        }
        config
    }

    /// Request URL in the form `<base>/<urlencoded location>?format=j1&lang=<lang>`.
    pub fn request_url(&self) -> String {
        format!(
            "{}/{}?format=j1&lang={}",
            self.endpoint.trim_end_matches('/'),
            urlencoding::encode(&self.location),
            self.language
        )
    }
}
