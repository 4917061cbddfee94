//! Demo data synthesis
//!
//! When the analysis service is unreachable the client substitutes a
//! plausible, internally consistent result so the map never shows a bare
//! error for a valid click. Values are randomized within fixed bands to
//! keep demo mode visibly alive; region and crop metadata are fixed.

use rand::Rng;
use shared::{
    AnalysisResult, Coordinate, LocationInfo, SoilData, WeatherData, RICE, WHEAT,
};

/// Synthesizes fallback analysis results. Total over all coordinates;
/// this is the error-recovery path and must never fail.
pub struct DemoDataSynthesizer;

impl DemoDataSynthesizer {
    /// Synthesize a result using the thread-local rng
    pub fn synthesize(coordinate: &Coordinate) -> AnalysisResult {
        Self::synthesize_with(&mut rand::thread_rng(), coordinate)
    }

    /// Synthesize with a caller-provided rng; tests pass a seeded
    /// `StdRng` for deterministic output
    pub fn synthesize_with<R: Rng>(rng: &mut R, coordinate: &Coordinate) -> AnalysisResult {
        AnalysisResult {
            location: LocationInfo {
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
                region: region_for_latitude(coordinate.latitude).to_string(),
                country: Some("Pakistan".to_string()),
            },
            weather: WeatherData {
                temperature: rng.gen_range(25.0..=40.0),
                humidity: rng.gen_range(40.0..=80.0),
                rainfall: rng.gen_range(0.0..=10.0),
                wind_speed: rng.gen_range(5.0..=20.0),
                date: None,
            },
            soil: SoilData {
                ph: rng.gen_range(6.5..=8.5),
                organic_matter: rng.gen_range(1.0..=3.0),
                nitrogen: rng.gen_range(0.02..=0.07),
                phosphorus: rng.gen_range(8.0..=23.0),
                potassium: rng.gen_range(100.0..=250.0),
                soil_type: "Alluvial".to_string(),
            },
            // Always exactly wheat then rice; only the scores vary
            crop_recommendations: vec![
                WHEAT.recommend(round1(rng.gen_range(7.0..=9.0))),
                RICE.recommend(round1(rng.gen_range(6.0..=8.0))),
            ],
        }
    }
}

/// Province from latitude thresholds
fn region_for_latitude(latitude: f64) -> &'static str {
    if latitude > 31.0 {
        "Punjab"
    } else if latitude > 27.0 {
        "Sindh"
    } else {
        "Balochistan"
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
