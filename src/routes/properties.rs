use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{DistanceAnnotator, FilterEngine};
use crate::models::{ErrorResponse, FilterCriteria, HealthResponse};
use crate::services::{PropertyStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PropertyStore>,
    pub annotator: DistanceAnnotator,
    pub engine: FilterEngine,
}

/// Configure all property-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/properties", web::get().to(list_properties))
        .route("/properties", web::post().to(search_properties));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List properties endpoint
///
/// GET /properties
///
/// Returns every record from the backing file as a JSON array, each
/// annotated with its commute distance in miles.
async fn list_properties(state: web::Data<AppState>) -> impl Responder {
    let mut records = match state.store.load() {
        Ok(records) => records,
        Err(err) => return store_error_response(&err),
    };

    state.annotator.annotate(&mut records);

    tracing::info!("Returning {} properties", records.len());

    HttpResponse::Ok().json(records)
}

/// Search properties endpoint
///
/// POST /properties
///
/// Request body:
/// ```json
/// {
///   "schoolAddress": "string",
///   "priceRange": [0, 1500],
///   "maxDistance": 5,
///   "bedrooms": 2,
///   "petsAllowed": true
/// }
/// ```
async fn search_properties(
    state: web::Data<AppState>,
    criteria: web::Json<FilterCriteria>,
) -> impl Responder {
    let mut records = match state.store.load() {
        Ok(records) => records,
        Err(err) => return store_error_response(&err),
    };

    state.annotator.annotate(&mut records);

    let matched = state.engine.apply(&criteria, &records);

    tracing::info!(
        "Returning {} of {} properties after filtering",
        matched.len(),
        records.len()
    );

    HttpResponse::Ok().json(matched)
}

/// Map store failures onto the endpoint's error contract.
fn store_error_response(err: &StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(_) => {
            tracing::error!("Backing file missing: {}", err);
            HttpResponse::NotFound().json(ErrorResponse::new(err.to_string()))
        }
        StoreError::InvalidJson(source) => {
            tracing::error!("Backing file is not valid JSON: {}", source);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Invalid JSON"))
        }
        StoreError::Io(source) => {
            tracing::error!("Failed to read backing file: {}", source);
            HttpResponse::InternalServerError().json(ErrorResponse::new(err.to_string()))
        }
    }
}
