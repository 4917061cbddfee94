//! WebAssembly module for the AgroMap client
//!
//! Exposes the pure query logic to the browser host:
//! - Geofence checks for click gating
//! - Free-text search resolution
//! - Report view-model rendering
//! - Coordinate status labels
//!
//! Values cross the JS boundary as JSON strings.

use wasm_bindgen::prelude::*;

use shared::{search, AnalysisResult, CityRegistry, Coordinate, ReportViewModel, PAKISTAN_BOUNDS};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"agromap wasm module loaded".into());
}

/// True when the point lies inside the supported region
#[wasm_bindgen]
pub fn is_within_bounds(latitude: f64, longitude: f64) -> bool {
    PAKISTAN_BOUNDS.contains(&Coordinate::new(latitude, longitude))
}

/// Resolve a free-text search query.
///
/// Returns the resolved location as JSON, or the user-facing rejection
/// message as the error.
#[wasm_bindgen]
pub fn resolve_search(query: &str) -> Result<String, JsValue> {
    resolve_search_impl(query).map_err(|e| JsValue::from_str(&e))
}

/// Render an analysis result into the display view model.
///
/// `result_json` is the `data` payload of the service envelope; `cached`
/// is the envelope's cache flag.
#[wasm_bindgen]
pub fn render_report(result_json: &str, cached: bool) -> Result<String, JsValue> {
    render_report_impl(result_json, cached).map_err(|e| JsValue::from_str(&e))
}

/// Coordinate label for the pointer status line
#[wasm_bindgen]
pub fn coordinate_label(latitude: f64, longitude: f64) -> String {
    Coordinate::new(latitude, longitude).label()
}

/// Known city names in registry order, as a JSON array
#[wasm_bindgen]
pub fn city_names() -> String {
    let registry = CityRegistry::new();
    let names: Vec<&str> = registry.cities().iter().map(|c| c.name.as_str()).collect();
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

fn resolve_search_impl(query: &str) -> Result<String, String> {
    let registry = CityRegistry::new();
    let resolved = search::resolve(query, &registry).map_err(|e| e.user_message().to_string())?;
    serde_json::to_string(&resolved).map_err(|e| e.to_string())
}

fn render_report_impl(result_json: &str, cached: bool) -> Result<String, String> {
    let result: AnalysisResult =
        serde_json::from_str(result_json).map_err(|e| format!("Invalid analysis JSON: {}", e))?;

    let report = ReportViewModel::render(&result, cached);
    serde_json::to_string(&report).map_err(|e| e.to_string())
}
