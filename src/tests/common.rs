use actix_web::{HttpResponse, ResponseError};
use sqlx::AnyPool;

use crate::config::{AuthConfig, DatabaseConfig};
use crate::database;
use crate::errors::ApiError;

pub const TEST_SECRET: &str = "temporary-test-key";

/// Fresh in-memory database with the production schema applied.
pub async fn setup_db() -> AnyPool {
    let config = DatabaseConfig {
        url: String::from("sqlite::memory:"),
        max_connections: 1,
    };
    database::connect(&config)
        .await
        .expect("Could not set up the test database")
}

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: String::from(TEST_SECRET),
        // Lowest cost bcrypt accepts; keeps the suite fast.
        bcrypt_cost: 4,
    }
}

/// Renders a handler result the way actix would.
pub fn into_response(result: Result<HttpResponse, ApiError>) -> HttpResponse {
    match result {
        Ok(response) => response,
        Err(e) => e.error_response(),
    }
}
