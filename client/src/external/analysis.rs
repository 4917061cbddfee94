//! Analysis service client
//!
//! Issues one GET per coordinate against the remote analysis service and
//! interprets its response envelope. Any failure — transport, non-2xx
//! status, or a malformed payload — is absorbed here by substituting
//! synthesized demo data, so callers never see an error for a
//! geofence-valid coordinate. The client keeps no cache of its own;
//! every call is independent.

use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use shared::{AnalysisResult, Coordinate};

use crate::demo::DemoDataSynthesizer;
use crate::error::{AppError, AppResult};

/// Client for the remote agricultural analysis service
#[derive(Clone)]
pub struct AnalysisClient {
    http_client: Client,
    base_url: String,
}

/// Response envelope from the analysis service
#[derive(Debug, Deserialize)]
struct AnalysisEnvelope {
    /// True when the service answered from its own cache
    cached: bool,
    data: AnalysisResult,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the analysis for a coordinate.
    ///
    /// Single attempt, no retry. Returns the payload with the
    /// server-reported cache flag on success; on any failure returns
    /// synthesized demo data with `cached == false`. The caller is
    /// responsible for geofence-checking the coordinate first.
    pub async fn fetch_analysis(&self, coordinate: &Coordinate) -> (AnalysisResult, bool) {
        match self.try_fetch(coordinate).await {
            Ok((result, cached)) => {
                tracing::debug!(
                    latitude = coordinate.latitude,
                    longitude = coordinate.longitude,
                    cached,
                    "analysis fetched"
                );
                (result, cached)
            }
            Err(e) => {
                tracing::warn!(
                    latitude = coordinate.latitude,
                    longitude = coordinate.longitude,
                    error = %e,
                    "analysis service unavailable, using demo data"
                );
                (DemoDataSynthesizer::synthesize(coordinate), false)
            }
        }
    }

    async fn try_fetch(&self, coordinate: &Coordinate) -> AppResult<(AnalysisResult, bool)> {
        let url = format!(
            "{}/api/v1/analysis/{}/{}",
            self.base_url, coordinate.latitude, coordinate.longitude
        );

        let response = self
            .http_client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Transport(format!(
                "analysis service returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let envelope: AnalysisEnvelope = serde_json::from_str(&body)
            .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        Ok((envelope.data, envelope.cached))
    }
}
