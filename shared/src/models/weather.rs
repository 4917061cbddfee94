//! Weather data models

use serde::{Deserialize, Serialize};

/// Current weather conditions at an analysis point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherData {
    /// Air temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Rainfall in millimetres
    pub rainfall: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Observation timestamp as reported by the service; absent in
    /// synthesized fallback data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
