//! Soil data models

use serde::{Deserialize, Serialize};

/// Soil composition at an analysis point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoilData {
    /// Soil pH
    pub ph: f64,
    /// Organic matter content in percent
    pub organic_matter: f64,
    /// Nitrogen content in percent
    pub nitrogen: f64,
    /// Phosphorus content in ppm
    pub phosphorus: f64,
    /// Potassium content in ppm
    pub potassium: f64,
    /// Soil classification, e.g. "Alluvial"
    pub soil_type: String,
}
