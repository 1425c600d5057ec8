use serde::{Deserialize, Serialize};

/// Client-supplied search criteria for `POST /properties`.
///
/// Every field is optional; a missing field disables that dimension of
/// filtering entirely. Unknown fields in the body are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring required in the record's address.
    #[serde(default)]
    #[serde(alias = "school_address", rename = "schoolAddress")]
    pub school_address: Option<String>,
    /// Inclusive `[min, max]` price bounds. Defaults to the configured
    /// range when absent.
    #[serde(default)]
    #[serde(alias = "price_range", rename = "priceRange")]
    pub price_range: Option<[f64; 2]>,
    /// Maximum commute distance in miles.
    #[serde(default)]
    #[serde(alias = "max_distance", rename = "maxDistance")]
    pub max_distance: Option<f64>,
    /// Exact bedroom count.
    #[serde(default)]
    pub bedrooms: Option<i64>,
    /// When true, only pet-friendly listings pass.
    #[serde(default)]
    #[serde(alias = "pets_allowed", rename = "petsAllowed")]
    pub pets_allowed: Option<bool>,
    /// When true, only listings with the `hasCar` flag pass.
    #[serde(default)]
    #[serde(alias = "has_car", rename = "hasCar")]
    pub has_car: Option<bool>,
    /// When true, only listings with the `publicTransport` flag pass.
    #[serde(default)]
    #[serde(alias = "public_transport", rename = "publicTransport")]
    pub public_transport: Option<bool>,
}
