use thiserror::Error;

/// Failures of the fetch-and-format pipeline.
///
/// Every variant ends up in the same place: its message becomes the tooltip of the
/// error record printed for the bar.
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport failure: DNS, connection, timeout or an unreadable body
    #[error("Failed to fetch weather data: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API request failed: {0}")]
    ApiRequestFailed(String),

    /// The body was not the expected JSON document
    #[error("Failed to parse weather data: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed response without any current condition entry
    #[error("no weather data")]
    NoWeatherData,
}
