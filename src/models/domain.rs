use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::parse::{integer, number, number_or, truthy};

/// Ordered field-name aliases accepted for latitude, tried in sequence.
pub const LATITUDE_KEYS: &[&str] = &["latitude", "lat"];

/// Ordered field-name aliases accepted for longitude, tried in sequence.
pub const LONGITUDE_KEYS: &[&str] = &["longitude", "lon", "lng"];

/// Field the distance annotator writes onto each record.
pub const DISTANCE_KEY: &str = "distance";

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A rental property record.
///
/// Records come from a JSON file the service does not control, so the
/// representation is an open object: the known fields are read through
/// lenient typed accessors and everything else passes through to the
/// response untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Property {
    fields: Map<String, Value>,
}

impl Property {
    /// Raw field lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Street address, or an empty string when missing or non-text.
    pub fn address(&self) -> &str {
        self.get("address").and_then(Value::as_str).unwrap_or("")
    }

    /// Monthly price. Missing or malformed values read as 0.
    pub fn price(&self) -> f64 {
        number_or(self.get("price"), 0.0)
    }

    /// Bedroom count, when it parses as an integer.
    pub fn bedrooms(&self) -> Option<i64> {
        self.get("bedrooms").and_then(integer)
    }

    /// Whether the listing is pet-friendly (the `pet` field, truthy).
    pub fn pet_friendly(&self) -> bool {
        truthy(self.get("pet"))
    }

    /// Whether an amenity flag (e.g. `hasCar`, `publicTransport`) is truthy.
    pub fn has_amenity(&self, key: &str) -> bool {
        truthy(self.get(key))
    }

    /// Latitude under the accepted aliases, finite numbers only.
    pub fn latitude(&self) -> Option<f64> {
        self.coordinate(LATITUDE_KEYS)
    }

    /// Longitude under the accepted aliases, finite numbers only.
    pub fn longitude(&self) -> Option<f64> {
        self.coordinate(LONGITUDE_KEYS)
    }

    /// Both coordinates, when present and parseable.
    pub fn coordinates(&self) -> Option<GeoPoint> {
        Some(GeoPoint {
            latitude: self.latitude()?,
            longitude: self.longitude()?,
        })
    }

    /// Commute distance in miles, when the record carries a parseable one.
    pub fn distance(&self) -> Option<f64> {
        self.get(DISTANCE_KEY).and_then(number)
    }

    /// Write the commute distance. No other field is altered.
    pub fn set_distance(&mut self, miles: f64) {
        self.fields.insert(DISTANCE_KEY.to_string(), Value::from(miles));
    }

    fn coordinate(&self, keys: &[&str]) -> Option<f64> {
        keys.iter().find_map(|key| self.get(key).and_then(number))
    }
}

impl From<Map<String, Value>> for Property {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
