//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components are finite numbers (not NaN or infinite)
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Display label with four decimal places, e.g. "Lat: 31.5804, Lon: 74.3587"
    pub fn label(&self) -> String {
        format!("Lat: {:.4}, Lon: {:.4}", self.latitude, self.longitude)
    }
}

/// An axis-aligned latitude/longitude bounding box
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Bounding box of the supported region (Pakistan)
pub const PAKISTAN_BOUNDS: BoundingBox = BoundingBox {
    min_lat: 23.69,
    max_lat: 36.98,
    min_lon: 60.87,
    max_lon: 75.85,
};

impl BoundingBox {
    /// Inclusive containment test on all four edges.
    ///
    /// Non-finite coordinates are never contained.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.is_finite()
            && coordinate.latitude >= self.min_lat
            && coordinate.latitude <= self.max_lat
            && coordinate.longitude >= self.min_lon
            && coordinate.longitude <= self.max_lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(PAKISTAN_BOUNDS.contains(&Coordinate::new(23.69, 60.87)));
        assert!(PAKISTAN_BOUNDS.contains(&Coordinate::new(36.98, 75.85)));
        assert!(PAKISTAN_BOUNDS.contains(&Coordinate::new(30.0, 70.0)));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(!PAKISTAN_BOUNDS.contains(&Coordinate::new(23.68, 70.0)));
        assert!(!PAKISTAN_BOUNDS.contains(&Coordinate::new(36.99, 70.0)));
        assert!(!PAKISTAN_BOUNDS.contains(&Coordinate::new(30.0, 60.86)));
        assert!(!PAKISTAN_BOUNDS.contains(&Coordinate::new(30.0, 75.86)));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(!PAKISTAN_BOUNDS.contains(&Coordinate::new(f64::NAN, 70.0)));
        assert!(!PAKISTAN_BOUNDS.contains(&Coordinate::new(30.0, f64::INFINITY)));
    }

    #[test]
    fn test_coordinate_label() {
        let label = Coordinate::new(31.5804, 74.3587).label();
        assert_eq!(label, "Lat: 31.5804, Lon: 74.3587");
    }
}
