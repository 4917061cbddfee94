//! Named city registry
//!
//! A fixed list of major cities with coordinates and province, used to
//! resolve free-text searches. Loaded once and read-only for the life
//! of the process.

use serde::{Deserialize, Serialize};

use crate::types::Coordinate;

/// A known named location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedCity {
    pub name: String,
    pub coordinate: Coordinate,
    /// Province the city belongs to
    pub region: String,
}

/// Registry order is fixed: lookups return the first match.
const CITIES: &[(&str, f64, f64, &str)] = &[
    ("Lahore", 31.5804, 74.3587, "Punjab"),
    ("Faisalabad", 31.4504, 73.1350, "Punjab"),
    ("Multan", 30.1575, 71.5249, "Punjab"),
    ("Rawalpindi", 33.5651, 73.0169, "Punjab"),
    ("Karachi", 24.8607, 67.0011, "Sindh"),
    ("Hyderabad", 25.3960, 68.3578, "Sindh"),
    ("Sukkur", 27.7202, 68.8574, "Sindh"),
    ("Peshawar", 34.0151, 71.5249, "Khyber Pakhtunkhwa"),
    ("Mardan", 34.1989, 72.0408, "Khyber Pakhtunkhwa"),
    ("Quetta", 30.1798, 66.9750, "Balochistan"),
];

/// Immutable ordered registry of known cities
#[derive(Debug, Clone)]
pub struct CityRegistry {
    cities: Vec<NamedCity>,
}

impl Default for CityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CityRegistry {
    pub fn new() -> Self {
        let cities = CITIES
            .iter()
            .map(|&(name, lat, lon, region)| NamedCity {
                name: name.to_string(),
                coordinate: Coordinate::new(lat, lon),
                region: region.to_string(),
            })
            .collect();
        Self { cities }
    }

    /// All cities in registry order
    pub fn cities(&self) -> &[NamedCity] {
        &self.cities
    }

    /// Case-insensitive substring lookup.
    ///
    /// Returns the first city in registry order whose name contains the
    /// trimmed query, or `None` when nothing matches.
    pub fn find_by_name(&self, query: &str) -> Option<&NamedCity> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.cities
            .iter()
            .find(|city| city.name.to_lowercase().contains(&needle))
    }

    /// Cities belonging to the given province, in registry order
    pub fn by_region(&self, region: &str) -> Vec<&NamedCity> {
        self.cities
            .iter()
            .filter(|city| city.region.eq_ignore_ascii_case(region))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_substring_match() {
        let registry = CityRegistry::new();
        let city = registry.find_by_name("LAHO").unwrap();
        assert_eq!(city.name, "Lahore");
        assert_eq!(city.region, "Punjab");
    }

    #[test]
    fn test_first_match_in_registry_order() {
        let registry = CityRegistry::new();
        // "a" matches several names; Lahore comes first
        let city = registry.find_by_name("a").unwrap();
        assert_eq!(city.name, "Lahore");
    }

    #[test]
    fn test_no_match() {
        let registry = CityRegistry::new();
        assert!(registry.find_by_name("Islamabad").is_none());
        assert!(registry.find_by_name("").is_none());
    }

    #[test]
    fn test_by_region() {
        let registry = CityRegistry::new();
        let sindh = registry.by_region("Sindh");
        let names: Vec<_> = sindh.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Karachi", "Hyderabad", "Sukkur"]);
    }

    #[test]
    fn test_all_cities_inside_bounds() {
        use crate::types::PAKISTAN_BOUNDS;
        let registry = CityRegistry::new();
        for city in registry.cities() {
            assert!(
                PAKISTAN_BOUNDS.contains(&city.coordinate),
                "{} is outside the supported region",
                city.name
            );
        }
    }
}
