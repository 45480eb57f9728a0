use sqlx::AnyPool;

use crate::errors::ApiError;
use crate::models::product::{NewProduct, Product};

pub async fn add_product(pool: &AnyPool, product: NewProduct) -> Result<i64, ApiError> {
    product.validate()?;

    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO products (image, product_title, price, unit, rating)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(product.image)
    .bind(product.product_title)
    .bind(product.price)
    .bind(product.unit)
    .bind(product.rating)
    .fetch_one(pool)
    .await
    .map_err(|e| ApiError::internal("Could not insert product into database", e))?;

    log::info!("added product {}", id);
    Ok(id)
}

pub async fn list_products(pool: &AnyPool) -> Result<Vec<Product>, ApiError> {
    sqlx::query_as::<_, Product>(
        r#"
        SELECT id, image, product_title, price, unit, rating
        FROM products
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| ApiError::internal("Couldn't fetch products", e))
}
