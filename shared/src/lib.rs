//! Shared types and models for the AgroMap client
//!
//! This crate contains the pure domain logic shared between the native
//! query controller and the browser (via WASM): the data model, geofence
//! validation, the city registry, free-text search resolution, and
//! report presentation. It performs no I/O.

pub mod models;
pub mod search;
pub mod types;
pub mod validation;

pub use models::*;
pub use search::*;
pub use types::*;
pub use validation::*;
