use serde::Deserialize;

/// Subset of the wttr.in `format=j1` document the bar needs.
#[derive(Deserialize, Debug)]
pub struct WttrResponse {
    /// Current observations; wttr.in sends exactly one entry when it has data
    pub current_condition: Vec<CurrentCondition>,
    /// Area wttr.in resolved the query to
    #[serde(default)]
    pub nearest_area: Vec<NearestArea>,
}

/// One current observation. wttr.in reports every value as a string.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct CurrentCondition {
    /// Temperature in Celsius
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    /// Apparent temperature in Celsius
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    /// Text descriptions, the first one is the condition label (e.g. "Partly cloudy")
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<Value>,
    /// Numeric condition code, e.g. "113"
    #[serde(rename = "weatherCode")]
    pub weather_code: String,
    /// Relative humidity in percent
    pub humidity: String,
    #[serde(rename = "windspeedKmph")]
    pub windspeed_kmph: String,
    /// 16-point compass direction, e.g. "NNW"
    #[serde(rename = "winddir16Point")]
    pub winddir_16_point: String,
    #[serde(rename = "precipMM")]
    pub precip_mm: String,
}

impl CurrentCondition {
    /// First description value, or an empty label when wttr.in sent none.
    pub fn condition(&self) -> &str {
        self.weather_desc
            .first()
            .map(|desc| desc.value.as_str())
            .unwrap_or_default()
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct NearestArea {
    #[serde(rename = "areaName")]
    pub area_name: Vec<Value>,
    pub country: Vec<Value>,
}

/// wttr.in wraps plain strings in `{"value": ...}` objects.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Value {
    pub value: String,
}
