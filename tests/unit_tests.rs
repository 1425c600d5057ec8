// Unit tests for Roomscout

use roomscout::core::{
    distance::{haversine_miles, round_miles},
    parse::{integer, number, number_or, truthy},
    DistanceAnnotator,
};
use roomscout::models::{GeoPoint, Property};
use serde_json::json;

const CAMPUS: GeoPoint = GeoPoint {
    latitude: 43.0015,
    longitude: -78.7876,
};

fn record(value: serde_json::Value) -> Property {
    serde_json::from_value(value).expect("record should deserialize")
}

#[test]
fn test_haversine_zero_at_reference() {
    let distance = haversine_miles(
        CAMPUS.latitude,
        CAMPUS.longitude,
        CAMPUS.latitude,
        CAMPUS.longitude,
    );
    assert!(distance < 0.01);
}

#[test]
fn test_haversine_campus_to_downtown_buffalo() {
    // UB North Campus to downtown Buffalo is roughly 9 miles
    let distance = haversine_miles(CAMPUS.latitude, CAMPUS.longitude, 42.8864, -78.8784);
    assert!(
        distance > 8.0 && distance < 11.0,
        "Expected ~9 miles, got {}",
        distance
    );
}

#[test]
fn test_round_miles_two_decimals() {
    assert_eq!(round_miles(9.1876), 9.19);
    assert_eq!(round_miles(3.604), 3.6);
}

#[test]
fn test_number_lenient_parsing() {
    assert_eq!(number(&json!(900)), Some(900.0));
    assert_eq!(number(&json!("950")), Some(950.0));
    assert_eq!(number(&json!("oops")), None);
    assert_eq!(number_or(Some(&json!("oops")), 0.0), 0.0);
}

#[test]
fn test_integer_lenient_parsing() {
    assert_eq!(integer(&json!(2)), Some(2));
    assert_eq!(integer(&json!("2")), Some(2));
    assert_eq!(integer(&json!(2.5)), None);
    assert_eq!(integer(&json!({})), None);
}

#[test]
fn test_truthy_semantics() {
    assert!(truthy(Some(&json!(true))));
    assert!(truthy(Some(&json!("yes"))));
    assert!(!truthy(Some(&json!(0))));
    assert!(!truthy(None));
}

#[test]
fn test_annotated_distance_matches_formula() {
    let lat = 42.9547;
    let lon = -78.8189;
    let mut records = vec![record(json!({"lat": lat, "lon": lon}))];

    DistanceAnnotator::new(CAMPUS).annotate(&mut records);

    let expected = round_miles(haversine_miles(CAMPUS.latitude, CAMPUS.longitude, lat, lon));
    assert_eq!(records[0].distance(), Some(expected));
}

#[test]
fn test_annotate_accepts_alias_spellings() {
    let mut records = vec![
        record(json!({"latitude": 42.9547, "longitude": -78.8189})),
        record(json!({"lat": 42.9547, "lon": -78.8189})),
        record(json!({"lat": 42.9547, "lng": -78.8189})),
    ];

    DistanceAnnotator::new(CAMPUS).annotate(&mut records);

    let first = records[0].distance();
    assert!(first.unwrap() > 0.0);
    assert_eq!(records[1].distance(), first);
    assert_eq!(records[2].distance(), first);
}

#[test]
fn test_annotate_accepts_string_coordinates() {
    let mut records = vec![record(json!({"lat": "42.9547", "lon": "-78.8189"}))];

    DistanceAnnotator::new(CAMPUS).annotate(&mut records);

    assert!(records[0].distance().unwrap() > 3.0);
}

#[test]
fn test_annotate_missing_or_invalid_coordinates_zero() {
    let mut records = vec![
        record(json!({"address": "301 Elmwood Ave"})),
        record(json!({"lat": "north", "lon": "west"})),
        record(json!({"lat": 42.9547})),
    ];

    DistanceAnnotator::new(CAMPUS).annotate(&mut records);

    for r in &records {
        assert_eq!(r.distance(), Some(0.0));
    }
}
