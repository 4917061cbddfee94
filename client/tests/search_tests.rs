//! Search resolution tests
//!
//! Free-text queries resolve to either an explicit coordinate or a city
//! from the registry; coordinate parsing takes priority over city lookup.

use proptest::prelude::*;
use shared::{search, CityRegistry, Coordinate, ResolvedLocation, SearchError, PAKISTAN_BOUNDS};

fn registry() -> CityRegistry {
    CityRegistry::new()
}

#[test]
fn explicit_coordinate_inside_bounds_resolves_to_point() {
    let resolved = search::resolve("31.5804, 74.3587", &registry()).unwrap();
    assert_eq!(
        resolved,
        ResolvedLocation::Point {
            coordinate: Coordinate::new(31.5804, 74.3587)
        }
    );
}

#[test]
fn well_formed_numbers_outside_region_fail_out_of_bounds() {
    assert_eq!(
        search::resolve("100, 100", &registry()),
        Err(SearchError::OutOfBounds)
    );
}

#[test]
fn city_names_match_case_insensitively() {
    for query in ["lahore", "LAHORE", "Laho"] {
        match search::resolve(query, &registry()).unwrap() {
            ResolvedLocation::City { city } => assert_eq!(city.name, "Lahore"),
            other => panic!("expected city for {query:?}, got {other:?}"),
        }
    }
}

#[test]
fn empty_and_whitespace_queries_fail_empty() {
    assert_eq!(search::resolve("", &registry()), Err(SearchError::EmptyQuery));
    assert_eq!(
        search::resolve("  \t ", &registry()),
        Err(SearchError::EmptyQuery)
    );
}

#[test]
fn unknown_city_fails_not_found() {
    assert_eq!(
        search::resolve("Islamabad", &registry()),
        Err(SearchError::CityNotFound)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any in-bounds coordinate pair resolves to a point at exactly
    /// those coordinates
    #[test]
    fn in_bounds_pairs_resolve(
        lat in 23.69f64..=36.98,
        lon in 60.87f64..=75.85,
    ) {
        let query = format!("{lat}, {lon}");
        let resolved = search::resolve(&query, &registry()).unwrap();
        match resolved {
            ResolvedLocation::Point { coordinate } => {
                prop_assert!(PAKISTAN_BOUNDS.contains(&coordinate));
                prop_assert!((coordinate.latitude - lat).abs() < 1e-9);
                prop_assert!((coordinate.longitude - lon).abs() < 1e-9);
            }
            other => prop_assert!(false, "expected point, got {:?}", other),
        }
    }

    /// Numeric-shaped queries never fall through to city lookup,
    /// whatever their values
    #[test]
    fn numeric_queries_never_hit_registry(
        lat in -200.0f64..200.0,
        lon in -200.0f64..200.0,
    ) {
        let query = format!("{lat},{lon}");
        match search::resolve(&query, &registry()) {
            Ok(ResolvedLocation::Point { .. }) | Err(SearchError::OutOfBounds) => {}
            other => prop_assert!(false, "unexpected resolution: {:?}", other),
        }
    }
}
