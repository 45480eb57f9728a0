use actix_web::{web, HttpResponse};
use sqlx::AnyPool;

use crate::errors::ApiError;
use crate::models::message_response::MessageResponse;
use crate::models::product::{NewProduct, ProductsResponse};
use crate::services::product_service;

pub async fn add_product(
    db_pool: web::Data<AnyPool>,
    new_product: web::Json<NewProduct>,
) -> Result<HttpResponse, ApiError> {
    product_service::add_product(&db_pool, new_product.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Product added successfully!")))
}

pub async fn get_products(db_pool: web::Data<AnyPool>) -> Result<HttpResponse, ApiError> {
    let products = product_service::list_products(&db_pool).await?;
    Ok(HttpResponse::Ok().json(ProductsResponse { products }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/products")
            .route(web::post().to(add_product))
            .route(web::get().to(get_products)),
    );
}
