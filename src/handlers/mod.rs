use actix_web::{error, web};

use crate::errors::ApiError;

pub mod health_handler;
pub mod product_handler;
pub mod user_handler;

const JSON_LIMIT: usize = 64 * 1024;

/// Every route the service exposes.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    health_handler::init_routes(cfg);
    user_handler::init_routes(cfg);
    product_handler::init_routes(cfg);
}

/// Turns body extraction failures into the `{"error": ...}` envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err: error::JsonPayloadError, req| {
            log::debug!("rejected body for {}: {}", req.path(), err);
            ApiError::InvalidInput(String::from("Invalid input")).into()
        })
}
