//! Crop recommendation models

use serde::{Deserialize, Serialize};

/// A single crop recommendation from the analysis service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop_name: String,
    /// Suitability on a 0-10 scale
    pub suitability_score: f64,
    /// Seasonal irrigation requirement in millimetres
    pub irrigation_need: f64,
    /// Fertilizer requirement as an "N-P-K" string
    pub fertilizer_npk: String,
    /// Growing season ("Rabi" or "Kharif")
    pub season: String,
    /// Month names in planting order
    pub planting_months: Vec<String>,
}

/// Fixed agronomic metadata for a crop, used when synthesizing
/// fallback recommendations
#[derive(Debug, Clone, Copy)]
pub struct CropProfile {
    pub name: &'static str,
    pub irrigation_need: f64,
    pub fertilizer_npk: &'static str,
    pub season: &'static str,
    pub planting_months: &'static [&'static str],
}

/// Wheat profile (Rabi season)
pub const WHEAT: CropProfile = CropProfile {
    name: "Wheat",
    irrigation_need: 450.0,
    fertilizer_npk: "120-60-60",
    season: "Rabi",
    planting_months: &["November", "December"],
};

/// Rice profile (Kharif season)
pub const RICE: CropProfile = CropProfile {
    name: "Rice",
    irrigation_need: 1200.0,
    fertilizer_npk: "120-90-60",
    season: "Kharif",
    planting_months: &["May", "June", "July"],
};

impl CropProfile {
    /// Build a recommendation from this profile with the given score
    pub fn recommend(&self, suitability_score: f64) -> CropRecommendation {
        CropRecommendation {
            crop_name: self.name.to_string(),
            suitability_score,
            irrigation_need: self.irrigation_need,
            fertilizer_npk: self.fertilizer_npk.to_string(),
            season: self.season.to_string(),
            planting_months: self.planting_months.iter().map(|m| m.to_string()).collect(),
        }
    }
}
