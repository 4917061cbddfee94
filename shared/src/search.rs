//! Free-text location search resolution
//!
//! A query is either an explicit "lat, lon" pair or a city name.
//! Coordinate parsing takes priority: a numeric-shaped query is never
//! treated as a city name.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{CityRegistry, NamedCity};
use crate::types::Coordinate;
use crate::validation::{parse_coordinate_pair, within_supported_region};

/// Successful resolution of a search query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedLocation {
    /// An explicit coordinate pair inside the supported region
    Point { coordinate: Coordinate },
    /// A known city matched by name
    City { city: NamedCity },
}

/// Why a search query could not be resolved
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("search query is empty")]
    EmptyQuery,
    #[error("coordinates are outside the supported region")]
    OutOfBounds,
    #[error("no matching city found")]
    CityNotFound,
}

impl SearchError {
    /// Message shown to the user when resolution fails
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::EmptyQuery => "Please enter a location (empty search)",
            SearchError::OutOfBounds => "Location is outside Pakistan boundaries",
            SearchError::CityNotFound => "Location not found",
        }
    }
}

/// Resolve a free-text query against the supported region and the city
/// registry.
pub fn resolve(query: &str, registry: &CityRegistry) -> Result<ResolvedLocation, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    if let Some(coordinate) = parse_coordinate_pair(query) {
        if within_supported_region(&coordinate) {
            return Ok(ResolvedLocation::Point { coordinate });
        }
        return Err(SearchError::OutOfBounds);
    }

    match registry.find_by_name(query) {
        Some(city) => Ok(ResolvedLocation::City { city: city.clone() }),
        None => Err(SearchError::CityNotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CityRegistry {
        CityRegistry::new()
    }

    #[test]
    fn test_explicit_coordinate_inside_bounds() {
        let resolved = resolve("31.5804, 74.3587", &registry()).unwrap();
        assert_eq!(
            resolved,
            ResolvedLocation::Point {
                coordinate: Coordinate::new(31.5804, 74.3587)
            }
        );
    }

    #[test]
    fn test_coordinate_outside_bounds() {
        assert_eq!(
            resolve("100, 100", &registry()),
            Err(SearchError::OutOfBounds)
        );
    }

    #[test]
    fn test_city_lookup() {
        let resolved = resolve("lahore", &registry()).unwrap();
        match resolved {
            ResolvedLocation::City { city } => assert_eq!(city.name, "Lahore"),
            other => panic!("expected city, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(resolve("", &registry()), Err(SearchError::EmptyQuery));
        assert_eq!(resolve("   ", &registry()), Err(SearchError::EmptyQuery));
    }

    #[test]
    fn test_numeric_query_never_falls_through_to_city() {
        // Well-formed numbers outside bounds fail as OutOfBounds even
        // though no city lookup happened
        assert_eq!(
            resolve("-31.58, 74.35", &registry()),
            Err(SearchError::OutOfBounds)
        );
    }

    #[test]
    fn test_user_messages() {
        assert!(SearchError::EmptyQuery.user_message().contains("empty"));
        assert!(SearchError::OutOfBounds
            .user_message()
            .contains("outside Pakistan boundaries"));
        assert!(SearchError::CityNotFound.user_message().contains("not found"));
    }
}
