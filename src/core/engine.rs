use crate::core::filters::{
    allows_pets, matches_address, matches_bedrooms, within_commute, within_price_range,
};
use crate::models::{FilterCriteria, Property};

/// Price bounds applied when the criteria omit a `priceRange`.
#[derive(Debug, Clone, Copy)]
pub struct FilterDefaults {
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_price: 10_000.0,
        }
    }
}

/// Applies client criteria to an annotated record list.
///
/// Each criteria dimension is an independent predicate and all of them are
/// AND-combined; a missing dimension is no constraint at all. Filtering
/// never mutates the input records and preserves their relative order.
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine {
    defaults: FilterDefaults,
}

impl FilterEngine {
    pub fn new(defaults: FilterDefaults) -> Self {
        Self { defaults }
    }

    pub fn with_default_bounds() -> Self {
        Self {
            defaults: FilterDefaults::default(),
        }
    }

    /// Select the records satisfying every applicable criterion.
    pub fn apply(&self, criteria: &FilterCriteria, records: &[Property]) -> Vec<Property> {
        records
            .iter()
            .filter(|record| self.matches(criteria, record))
            .cloned()
            .collect()
    }

    /// Full predicate over a single record.
    pub fn matches(&self, criteria: &FilterCriteria, record: &Property) -> bool {
        let [min_price, max_price] = criteria
            .price_range
            .unwrap_or([self.defaults.min_price, self.defaults.max_price]);
        if !within_price_range(record, min_price, max_price) {
            return false;
        }

        if let Some(max_distance) = criteria.max_distance {
            if !within_commute(record, max_distance) {
                return false;
            }
        }

        if let Some(bedrooms) = criteria.bedrooms {
            if !matches_bedrooms(record, bedrooms) {
                return false;
            }
        }

        if criteria.pets_allowed.unwrap_or(false) && !allows_pets(record) {
            return false;
        }

        if criteria.has_car.unwrap_or(false) && !record.has_amenity("hasCar") {
            return false;
        }

        if criteria.public_transport.unwrap_or(false) && !record.has_amenity("publicTransport") {
            return false;
        }

        if let Some(needle) = criteria.school_address.as_deref() {
            if !needle.is_empty() && !matches_address(record, needle) {
                return false;
            }
        }

        true
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::with_default_bounds()
    }
}
