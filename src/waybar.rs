//! The JSON record a Waybar custom module reads from stdout.

use chrono::{Local, NaiveTime};
use serde::Serialize;
use tracing::warn;

use crate::{
    category::Category,
    config::Config,
    error::AppError,
    icons,
    weather::{self, WttrResponse},
};

const ERROR_TEXT: &str = "⚠ N/A";
const ERROR_LABEL: &str = "error";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WaybarOutput {
    /// Icon and temperature shown in the bar
    pub text: String,
    /// Multi-line detail block shown on hover
    pub tooltip: String,
    /// Raw condition label
    pub alt: String,
    /// CSS class for styling
    pub class: String,
}

impl WaybarOutput {
    /// Builds the record from the first current condition entry.
    ///
    /// `updated` is the local time printed in the tooltip; callers pass the time at which
    /// the record is formatted, not anything reported by the API.
    pub fn from_response(
        response: &WttrResponse,
        display_name: &str,
        updated: NaiveTime,
    ) -> Result<Self, AppError> {
        let current = response
            .current_condition
            .first()
            .ok_or(AppError::NoWeatherData)?;

        let condition = current.condition();
        let icon = icons::resolve(condition, &current.weather_code);

        let tooltip = format!(
            "{}\n{}\nTemperature: {}°C\nFeels like: {}°C\nHumidity: {}%\nWind: {} km/h {}\nPrecipitation: {} mm\nUpdated: {}",
            display_name,
            condition,
            current.temp_c,
            current.feels_like_c,
            current.humidity,
            current.windspeed_kmph,
            current.winddir_16_point,
            current.precip_mm,
            updated.format("%H:%M:%S"),
        );

        Ok(Self {
            text: format!("{} {}°C", icon, current.temp_c),
            tooltip,
            alt: condition.to_string(),
            class: Category::classify(condition).to_string(),
        })
    }

    /// The fixed record shown whenever the pipeline fails.
    pub fn error(err: &AppError) -> Self {
        Self {
            text: ERROR_TEXT.to_string(),
            tooltip: err.to_string(),
            alt: ERROR_LABEL.to_string(),
            class: ERROR_LABEL.to_string(),
        }
    }

    /// Single-line JSON encoding; newlines in the tooltip are escaped.
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

async fn fetch_output(config: &Config) -> Result<WaybarOutput, AppError> {
    let response = weather::get_weather(config).await?;
    WaybarOutput::from_response(&response, &config.display_name, Local::now().time())
}

/// Runs one fetch-and-format attempt. Any failure is replaced by the error record.
pub async fn current_output(config: &Config) -> WaybarOutput {
    match fetch_output(config).await {
        Ok(output) => output,
        Err(e) => {
            warn!("Weather unavailable: {}", e);
            WaybarOutput::error(&e)
        }
    }
}
