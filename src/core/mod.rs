// Core algorithm exports
pub mod annotate;
pub mod distance;
pub mod engine;
pub mod filters;
pub mod parse;

pub use annotate::DistanceAnnotator;
pub use distance::{haversine_miles, round_miles};
pub use engine::{FilterDefaults, FilterEngine};
pub use filters::{allows_pets, matches_address, matches_bedrooms, within_commute, within_price_range};
pub use parse::{integer, number, number_or, truthy};
