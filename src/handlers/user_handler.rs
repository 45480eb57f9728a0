use actix_web::{web, HttpResponse};
use sqlx::AnyPool;

use crate::config::AuthConfig;
use crate::errors::ApiError;
use crate::models::credentials::Credentials;
use crate::models::message_response::MessageResponse;
use crate::models::user::{UserKey, UserResponse, UsersResponse};
use crate::services::user_service;

pub async fn register(
    db_pool: web::Data<AnyPool>,
    auth: web::Data<AuthConfig>,
    credentials: web::Json<Credentials>,
) -> Result<HttpResponse, ApiError> {
    user_service::register(&db_pool, &auth, credentials.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("User successfully created")))
}

pub async fn login(
    db_pool: web::Data<AnyPool>,
    auth: web::Data<AuthConfig>,
    credentials: web::Json<Credentials>,
) -> Result<HttpResponse, ApiError> {
    let response = user_service::login(&db_pool, &auth, credentials.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn get_users(db_pool: web::Data<AnyPool>) -> Result<HttpResponse, ApiError> {
    let users = user_service::list_users(&db_pool).await?;
    Ok(HttpResponse::Ok().json(UsersResponse { users }))
}

pub async fn get_user(
    db_pool: web::Data<AnyPool>,
    key: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service::get_user(&db_pool, &UserKey::parse(&key)).await?;
    Ok(HttpResponse::Ok().json(UserResponse { user }))
}

pub async fn delete_user(
    db_pool: web::Data<AnyPool>,
    key: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    user_service::delete_user(&db_pool, &UserKey::parse(&key)).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("User successfully deleted")))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/register").route(web::post().to(register)));

    cfg.service(web::resource("/login").route(web::post().to(login)));

    cfg.service(web::resource("/users").route(web::get().to(get_users)));

    cfg.service(
        web::resource("/users/{id}")
            .route(web::get().to(get_user))
            .route(web::delete().to(delete_user)),
    );
}
