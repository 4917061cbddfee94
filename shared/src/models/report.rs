//! Report view model
//!
//! Pure transformation from an analysis result and cache flag into the
//! display-ready structure handed to the map collaborator. Created per
//! render call and discarded after display.

use serde::{Deserialize, Serialize};

use crate::models::AnalysisResult;

/// Placeholder text shown when the service returns no recommendations
pub const NO_CROPS_MESSAGE: &str = "No suitable crops found for this location";

/// Display-ready agricultural report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportViewModel {
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Whether the service answered from its own cache, rendered as a badge
    pub cached: bool,
    pub weather: WeatherSummary,
    pub soil: SoilSummary,
    pub crops: CropSection,
}

/// Formatted weather lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub temperature: String,
    pub humidity: String,
    pub rainfall: String,
    pub wind_speed: String,
}

/// Formatted soil lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilSummary {
    pub ph: String,
    pub soil_type: String,
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub organic_matter: String,
}

/// Crop recommendations, or an explicit empty-state placeholder
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CropSection {
    Recommendations { entries: Vec<CropEntry> },
    Empty { message: String },
}

/// One rendered crop recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropEntry {
    pub name: String,
    pub suitability: String,
    pub irrigation: String,
    pub fertilizer_npk: String,
    pub season: String,
    pub planting_months: String,
}

impl ReportViewModel {
    /// Render an analysis result for display. Never mutates its input;
    /// the cache flag passes through unchanged.
    pub fn render(result: &AnalysisResult, cached: bool) -> Self {
        let crops = if result.crop_recommendations.is_empty() {
            CropSection::Empty {
                message: NO_CROPS_MESSAGE.to_string(),
            }
        } else {
            CropSection::Recommendations {
                entries: result
                    .crop_recommendations
                    .iter()
                    .map(|crop| CropEntry {
                        name: crop.crop_name.clone(),
                        suitability: format!("{:.1} / 10", crop.suitability_score),
                        irrigation: format!("{:.0} mm", crop.irrigation_need),
                        fertilizer_npk: crop.fertilizer_npk.clone(),
                        season: crop.season.clone(),
                        planting_months: crop.planting_months.join(", "),
                    })
                    .collect(),
            }
        };

        Self {
            crops,
            region: result.location.region.clone(),
            latitude: result.location.latitude,
            longitude: result.location.longitude,
            cached,
            weather: WeatherSummary {
                temperature: format!("{:.1} °C", result.weather.temperature),
                humidity: format!("{:.0}%", result.weather.humidity),
                rainfall: format!("{:.1} mm", result.weather.rainfall),
                wind_speed: format!("{:.1} km/h", result.weather.wind_speed),
            },
            soil: SoilSummary {
                ph: format!("{:.1}", result.soil.ph),
                soil_type: result.soil.soil_type.clone(),
                nitrogen: format!("{:.3}%", result.soil.nitrogen),
                phosphorus: format!("{:.1} ppm", result.soil.phosphorus),
                potassium: format!("{:.0} ppm", result.soil.potassium),
                organic_matter: format!("{:.1}%", result.soil.organic_matter),
            },
        }
    }
}
