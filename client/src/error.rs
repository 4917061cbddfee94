//! Error handling for the AgroMap client
//!
//! No variant is fatal: geofence and search failures become user-facing
//! messages, transport and payload failures are absorbed inside the
//! analysis client by falling back to synthesized demo data.

use shared::SearchError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Coordinate outside the supported bounding box; no request issued
    #[error("coordinates ({latitude}, {longitude}) are outside the supported region")]
    GeofenceViolation { latitude: f64, longitude: f64 },

    /// Network error or non-2xx status from the analysis service
    #[error("analysis request failed: {0}")]
    Transport(String),

    /// Success status but the payload was not the expected envelope
    #[error("malformed analysis response: {0}")]
    MalformedResponse(String),

    /// Free-text search could not be resolved
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Configuration loading failed
    #[error("configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Message shown to the user for failures that reach the surface
    pub fn user_message(&self) -> String {
        match self {
            AppError::GeofenceViolation { .. } => {
                "Please select a location within Pakistan".to_string()
            }
            AppError::Search(e) => e.user_message().to_string(),
            // Transport and payload failures are recovered internally and
            // never shown; configuration errors surface to the host app
            other => other.to_string(),
        }
    }
}
