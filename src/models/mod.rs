// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{GeoPoint, Property, DISTANCE_KEY, LATITUDE_KEYS, LONGITUDE_KEYS};
pub use requests::FilterCriteria;
pub use responses::{ErrorResponse, HealthResponse};
