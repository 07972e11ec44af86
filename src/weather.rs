use tracing::{debug, error, info};

use crate::{config::Config, error::AppError};

mod response;

pub use response::WttrResponse;

/// Fetches the current conditions for the configured location from wttr.in.
///
/// A single GET bounded by `config.timeout`, no retries. Transport failures, non-success
/// statuses and undecodable bodies are returned as the matching [`AppError`].
pub async fn get_weather(config: &Config) -> Result<WttrResponse, AppError> {
    info!("Fetching weather data for location: {}", config.location);
    let url = config.request_url();

    let client = reqwest::Client::builder().timeout(config.timeout).build()?;
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        error!("Failed to fetch weather data: {}", response.status());
        return Err(AppError::ApiRequestFailed(response.status().to_string()));
    }

    // read the whole body first so transport and decode failures stay distinct
    let body = response.bytes().await?;
    let weather_response: WttrResponse = serde_json::from_slice(&body)?;
    debug!("Weather data fetched successfully: {:?}", weather_response);

    if let Some(area) = weather_response.nearest_area.first() {
        debug!(
            "Nearest area: {}, {}",
            area.area_name.first().map(|v| v.value.as_str()).unwrap_or_default(),
            area.country.first().map(|v| v.value.as_str()).unwrap_or_default()
        );
    }

    Ok(weather_response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wttr_subset_and_ignores_unknown_fields() {
        let body = r#"{
            "current_condition": [{
                "FeelsLikeC": "19",
                "humidity": "40",
                "precipMM": "0.0",
                "temp_C": "21",
                "weatherCode": "113",
                "weatherDesc": [{"value": "Sunny"}],
                "winddir16Point": "NW",
                "windspeedKmph": "13",
                "visibility": "10"
            }],
            "nearest_area": [{
                "areaName": [{"value": "Batna"}],
                "country": [{"value": "Algeria"}],
                "latitude": "35.556"
            }],
            "weather": []
        }"#;

        let response: WttrResponse = serde_json::from_str(body).unwrap();
        let current = &response.current_condition[0];
        assert_eq!(current.temp_c, "21");
        assert_eq!(current.feels_like_c, "19");
        assert_eq!(current.condition(), "Sunny");
        assert_eq!(current.weather_code, "113");
        assert_eq!(current.winddir_16_point, "NW");
        assert_eq!(response.nearest_area[0].area_name[0].value, "Batna");
        assert_eq!(response.nearest_area[0].country[0].value, "Algeria");
    }

    #[test]
    fn missing_description_yields_empty_condition() {
        let body = r#"{"current_condition": [{"temp_C": "5", "weatherCode": "119"}]}"#;
        let response: WttrResponse = serde_json::from_str(body).unwrap();
        assert!(response.nearest_area.is_empty());
        assert_eq!(response.current_condition[0].condition(), "");
        assert_eq!(response.current_condition[0].humidity, "");
    }

    #[test]
    fn missing_current_condition_is_a_decode_error() {
        assert!(serde_json::from_str::<WttrResponse>(r#"{"nearest_area": []}"#).is_err());
    }
}
