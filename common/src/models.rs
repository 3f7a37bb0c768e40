use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform error body returned by every proxy endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    pub error: String,
}

/// Current conditions as returned by the weather upstream (metric units).
///
/// The proxy forwards this payload untouched; this type is the typed view the
/// client reads it through. Fields not listed here are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CurrentWeather {
    pub name: String,
    pub main: MainReadings,
    pub wind: Wind,
    pub weather: Vec<Condition>,
    /// Shift in seconds from UTC
    #[serde(default)]
    pub timezone: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Condition {
    pub main: String,
    pub description: String,
}

impl CurrentWeather {
    pub fn location_name(&self) -> &str {
        &self.name
    }

    pub fn temperature_celsius(&self) -> f64 {
        self.main.temp
    }

    pub fn humidity_percent(&self) -> i64 {
        self.main.humidity
    }

    pub fn wind_speed_mps(&self) -> f64 {
        self.wind.speed
    }

    pub fn condition_main(&self) -> Option<&str> {
        self.weather.first().map(|c| c.main.as_str())
    }

    pub fn condition_description(&self) -> Option<&str> {
        self.weather.first().map(|c| c.description.as_str())
    }

    pub fn timezone_offset_seconds(&self) -> i64 {
        self.timezone
    }
}

/// One forecast sample, roughly one per calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastDay {
    /// Upstream timestamp text, e.g. `2026-10-17 12:00:00`
    pub date: String,
    #[serde(rename = "temp")]
    pub temperature_celsius: f64,
    #[serde(rename = "condition")]
    pub condition_main: String,
    #[serde(rename = "description")]
    pub condition_description: String,
}

/// Forecast endpoint response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastResponse {
    pub city: String,
    pub forecast: Vec<ForecastDay>,
}

/// Background endpoint response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BackgroundImage {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}
