//! Map query controller
//!
//! Event-driven glue between user interactions and the analysis client.
//! The visual map is an injected [`MapController`] capability so the
//! core runs without a rendering surface. Handlers are driven from one
//! event loop; an awaited fetch suspends only its own event, and
//! overlapping fetches complete independently with no de-duplication or
//! cancellation (each pushes its own popup).

use shared::{
    search, CityRegistry, Coordinate, ReportViewModel, ResolvedLocation, PAKISTAN_BOUNDS,
};

use crate::config::MapConfig;
use crate::error::AppError;
use crate::external::analysis::AnalysisClient;

/// Capability the visual map exposes to the core
pub trait MapController {
    /// Recenter the view on a coordinate at the given zoom level
    fn recenter(&self, coordinate: Coordinate, zoom: u8);

    /// Open a report popup at a coordinate
    fn show_popup(&self, coordinate: Coordinate, report: &ReportViewModel);

    /// Drop a labelled marker at a coordinate
    fn add_marker(&self, coordinate: Coordinate, label: &str);

    /// Show a transient user-facing message (search rejections etc.)
    fn show_message(&self, text: &str);

    /// Update the pointer-position status line
    fn set_status_line(&self, text: &str);
}

/// Handles click, search and pointer-move events for one map instance
pub struct QueryController<M: MapController> {
    analysis: AnalysisClient,
    registry: CityRegistry,
    map_config: MapConfig,
    map: M,
}

impl<M: MapController> QueryController<M> {
    pub fn new(analysis: AnalysisClient, map_config: MapConfig, map: M) -> Self {
        Self {
            analysis,
            registry: CityRegistry::new(),
            map_config,
            map,
        }
    }

    /// The injected map capability
    pub fn map(&self) -> &M {
        &self.map
    }

    /// The city registry backing search resolution
    pub fn registry(&self) -> &CityRegistry {
        &self.registry
    }

    /// Handle a map click.
    ///
    /// Out-of-bounds clicks are rejected with a message and no request.
    /// In-bounds clicks always end in a popup: the analysis client falls
    /// back to demo data when the service is unreachable.
    pub async fn handle_click(&self, latitude: f64, longitude: f64) {
        let coordinate = Coordinate::new(latitude, longitude);
        if !PAKISTAN_BOUNDS.contains(&coordinate) {
            let rejection = AppError::GeofenceViolation {
                latitude,
                longitude,
            };
            tracing::info!(latitude, longitude, "click outside supported region");
            self.map.show_message(&rejection.user_message());
            return;
        }

        let (result, cached) = self.analysis.fetch_analysis(&coordinate).await;
        let report = ReportViewModel::render(&result, cached);
        self.map.show_popup(coordinate, &report);
    }

    /// Handle a submitted search string.
    ///
    /// A resolved location recenters the map and drops a marker; a
    /// failed resolution shows the rejection message and leaves map
    /// state untouched.
    pub fn handle_search(&self, query: &str) {
        match search::resolve(query, &self.registry) {
            Ok(ResolvedLocation::Point { coordinate }) => {
                self.map.recenter(coordinate, self.map_config.point_zoom);
                self.map.add_marker(coordinate, &coordinate.label());
            }
            Ok(ResolvedLocation::City { city }) => {
                self.map.recenter(city.coordinate, self.map_config.city_zoom);
                self.map.add_marker(city.coordinate, &city.name);
            }
            Err(e) => {
                tracing::info!(query, error = %e, "search resolution failed");
                self.map.show_message(e.user_message());
            }
        }
    }

    /// Handle a pointer move by updating the coordinate status line
    pub fn handle_pointer_move(&self, latitude: f64, longitude: f64) {
        self.map
            .set_status_line(&Coordinate::new(latitude, longitude).label());
    }
}
