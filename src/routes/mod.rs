// Route exports
pub mod properties;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(properties::configure);
}
