use std::time::Duration;

use sqlx::any::AnyPoolOptions;
use sqlx::{AnyPool, Connection};

use crate::config::DatabaseConfig;

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("failed to connect to the database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("failed to ping the database: {0}")]
    Ping(#[source] sqlx::Error),
    #[error("failed to initialize the schema: {0}")]
    Schema(#[source] sqlx::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Backend {
        if url.starts_with("sqlite:") {
            Backend::Sqlite
        } else {
            Backend::Postgres
        }
    }

    fn schema(self) -> &'static [&'static str] {
        match self {
            Backend::Postgres => POSTGRES_SCHEMA,
            Backend::Sqlite => SQLITE_SCHEMA,
        }
    }
}

const POSTGRES_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id BIGSERIAL PRIMARY KEY,
        image TEXT NOT NULL,
        product_title TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL,
        unit TEXT NOT NULL,
        rating BIGINT NOT NULL CHECK (rating BETWEEN 1 AND 5)
    )
    "#,
];

const SQLITE_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        image TEXT NOT NULL,
        product_title TEXT NOT NULL,
        price REAL NOT NULL,
        unit TEXT NOT NULL,
        rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5)
    )
    "#,
];

/// Opens the pool, checks that the server answers and creates missing tables.
pub async fn connect(config: &DatabaseConfig) -> Result<AnyPool, DatabaseError> {
    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(0)
        .idle_timeout(Duration::from_secs(10 * 60))
        .max_lifetime(Duration::from_secs(60 * 60))
        .connect(&config.url)
        .await
        .map_err(DatabaseError::Connect)?;

    let mut conn = pool.acquire().await.map_err(DatabaseError::Connect)?;
    conn.ping().await.map_err(DatabaseError::Ping)?;
    drop(conn);

    init_schema(&pool, Backend::from_url(&config.url)).await?;

    Ok(pool)
}

pub async fn init_schema(pool: &AnyPool, backend: Backend) -> Result<(), DatabaseError> {
    for statement in backend.schema() {
        sqlx::query(*statement)
            .execute(pool)
            .await
            .map_err(DatabaseError::Schema)?;
    }
    log::debug!("schema ready for {:?}", backend);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_follows_url_scheme() {
        assert_eq!(Backend::from_url("sqlite::memory:"), Backend::Sqlite);
        assert_eq!(Backend::from_url("sqlite://db/homebuzz.db"), Backend::Sqlite);
        assert_eq!(
            Backend::from_url("postgres://user:pw@localhost:5432/homebuzz?sslmode=disable"),
            Backend::Postgres
        );
    }

    #[actix_rt::test]
    async fn connect_creates_tables_and_is_idempotent() {
        let config = DatabaseConfig {
            url: String::from("sqlite::memory:"),
            max_connections: 1,
        };
        let pool = connect(&config).await.expect("Failed to create pool.");
        init_schema(&pool, Backend::Sqlite)
            .await
            .expect("Schema creation should be repeatable.");

        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!((users, products), (0, 0));
    }
}
