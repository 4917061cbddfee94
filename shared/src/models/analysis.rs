//! Analysis result models

use serde::{Deserialize, Serialize};

use crate::models::{CropRecommendation, SoilData, WeatherData};

/// Location block of an analysis result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInfo {
    pub latitude: f64,
    pub longitude: f64,
    /// Province name, e.g. "Punjab"
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Complete agricultural analysis for a single coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub location: LocationInfo,
    pub weather: WeatherData,
    pub soil: SoilData,
    #[serde(default)]
    pub crop_recommendations: Vec<CropRecommendation>,
}
