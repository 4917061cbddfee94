//! Validation utilities for the AgroMap client
//!
//! Geofence checks and free-text coordinate parsing used by search
//! resolution and click handling.

use crate::types::{BoundingBox, Coordinate, PAKISTAN_BOUNDS};

/// Check a coordinate against the supported region
pub fn within_supported_region(coordinate: &Coordinate) -> bool {
    PAKISTAN_BOUNDS.contains(coordinate)
}

/// Check a coordinate against an arbitrary bounding box
pub fn within_bounds(coordinate: &Coordinate, bounds: &BoundingBox) -> bool {
    bounds.contains(coordinate)
}

/// True when the token looks like a signed decimal number: optional sign,
/// digits, optional decimal point. Scientific notation and words like
/// "inf" are not coordinate-shaped.
pub fn is_numeric_token(token: &str) -> bool {
    let token = token.trim();
    if token.is_empty() {
        return false;
    }
    let rest = token.strip_prefix(['+', '-']).unwrap_or(token);
    if rest.is_empty() {
        return false;
    }
    let mut seen_dot = false;
    let mut seen_digit = false;
    for c in rest.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

/// Parse a "lat, lon" pair from free text.
///
/// Returns `Some` only when the input is exactly two comma-separated
/// numeric tokens; range checking is the caller's concern.
pub fn parse_coordinate_pair(input: &str) -> Option<Coordinate> {
    let mut parts = input.split(',');
    let (first, second) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    if !is_numeric_token(first) || !is_numeric_token(second) {
        return None;
    }
    let latitude: f64 = first.trim().parse().ok()?;
    let longitude: f64 = second.trim().parse().ok()?;
    Some(Coordinate::new(latitude, longitude))
}
