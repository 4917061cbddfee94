//! AgroMap client core
//!
//! The query controller behind an interactive agriculture map of
//! Pakistan: geofence-gated analysis requests with demo-data fallback,
//! free-text location search, and report presentation. All rendering is
//! delegated to an injected [`MapController`] capability, keeping the
//! core testable without a map surface.

pub mod config;
pub mod controller;
pub mod demo;
pub mod error;
pub mod external;

pub use config::Config;
pub use controller::{MapController, QueryController};
pub use demo::DemoDataSynthesizer;
pub use error::{AppError, AppResult};
pub use external::analysis::AnalysisClient;
