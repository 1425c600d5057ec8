/// Earth's radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Miles per meter
const MILES_PER_METER: f64 = 0.000_621_371;

/// Calculate the Haversine distance between two points in miles
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in miles
#[inline]
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c * MILES_PER_METER
}

/// Round a distance to two decimal places, the precision records carry.
#[inline]
pub fn round_miles(miles: f64) -> f64 {
    (miles * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero_at_same_point() {
        let distance = haversine_miles(43.0015, -78.7876, 43.0015, -78.7876);
        assert!(distance < 0.01);
    }

    #[test]
    fn test_haversine_london_to_paris() {
        // Distance from London to Paris (approximately 214 miles)
        let london_lat = 51.5074;
        let london_lon = -0.1278;
        let paris_lat = 48.8566;
        let paris_lon = 2.3522;

        let distance = haversine_miles(london_lat, london_lon, paris_lat, paris_lon);
        assert!(
            (distance - 214.0).abs() < 6.0,
            "Distance should be ~214 miles, got {}",
            distance
        );
    }

    #[test]
    fn test_haversine_campus_to_downtown() {
        // UB North Campus to downtown Buffalo is roughly 10 miles
        let distance = haversine_miles(43.0015, -78.7876, 42.8864, -78.8784);
        assert!(
            distance > 8.0 && distance < 12.0,
            "Expected ~10 miles, got {}",
            distance
        );
    }

    #[test]
    fn test_round_miles() {
        assert_eq!(round_miles(10.456), 10.46);
        assert_eq!(round_miles(10.454), 10.45);
        assert_eq!(round_miles(0.0), 0.0);
    }
}
