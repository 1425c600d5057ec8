use crate::models::Property;

/// Price check with inclusive bounds.
///
/// Record prices parse leniently: a missing or malformed price reads as 0
/// and is judged against the same bounds.
#[inline]
pub fn within_price_range(record: &Property, min_price: f64, max_price: f64) -> bool {
    let price = record.price();
    price >= min_price && price <= max_price
}

/// Commute check. A record with no parseable distance fails.
#[inline]
pub fn within_commute(record: &Property, max_distance: f64) -> bool {
    match record.distance() {
        Some(distance) => distance <= max_distance,
        None => false,
    }
}

/// Exact bedroom-count check. An unparseable count fails.
#[inline]
pub fn matches_bedrooms(record: &Property, bedrooms: i64) -> bool {
    record.bedrooms() == Some(bedrooms)
}

/// Pet policy check against the record's `pet` field.
#[inline]
pub fn allows_pets(record: &Property) -> bool {
    record.pet_friendly()
}

/// Case-insensitive substring match on the record's address.
#[inline]
pub fn matches_address(record: &Property, needle: &str) -> bool {
    record
        .address()
        .to_lowercase()
        .contains(&needle.to_lowercase())
}
