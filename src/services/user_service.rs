use sqlx::AnyPool;

use crate::config::AuthConfig;
use crate::errors::ApiError;
use crate::models::credentials::Credentials;
use crate::models::token_response::TokenResponse;
use crate::models::user::{User, UserKey};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::token::issue_token;

fn user_not_found() -> ApiError {
    ApiError::NotFound(String::from("User not found"))
}

/// Creates a user with a bcrypt-hashed password.
///
/// The existence check gives the common case a clean 409; the `UNIQUE`
/// constraint on `users.username` settles concurrent registrations.
pub async fn register(
    pool: &AnyPool,
    auth: &AuthConfig,
    credentials: Credentials,
) -> Result<(), ApiError> {
    let credentials = credentials.validated_for_registration()?;

    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
        .bind(&credentials.username)
        .fetch_optional(pool)
        .await
        .map_err(|e| ApiError::internal("Failed to create user", e))?;
    if existing.is_some() {
        return Err(ApiError::Conflict(String::from("User already exists")));
    }

    let hashed_password = hash_password(credentials.password, auth.bcrypt_cost).await?;

    let result = sqlx::query(
        r#"
        INSERT INTO users (username, password)
        VALUES ($1, $2)
        "#,
    )
    .bind(&credentials.username)
    .bind(&hashed_password)
    .execute(pool)
    .await;

    match result {
        Ok(_) => {
            log::info!("registered user {}", credentials.username);
            Ok(())
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(ApiError::Conflict(String::from("User already exists")))
        }
        Err(e) => Err(ApiError::internal("Failed to create user", e)),
    }
}

/// Verifies the password and returns a signed token for the user.
pub async fn login(
    pool: &AnyPool,
    auth: &AuthConfig,
    credentials: Credentials,
) -> Result<TokenResponse, ApiError> {
    let credentials = credentials.validated()?;

    let stored: Option<String> = sqlx::query_scalar(
        r#"
        SELECT password
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(&credentials.username)
    .fetch_optional(pool)
    .await
    .map_err(|e| ApiError::internal("Failed to log in", e))?;

    let Some(hashed_password) = stored else {
        return Err(ApiError::Unauthorized);
    };
    if !verify_password(credentials.password, hashed_password).await? {
        return Err(ApiError::Unauthorized);
    }

    let token = issue_token(&credentials.username, &auth.jwt_secret)
        .map_err(|e| ApiError::internal("Failed to generate token", e))?;

    Ok(TokenResponse {
        message: String::from("Login successful"),
        username: credentials.username,
        token,
    })
}

pub async fn list_users(pool: &AnyPool) -> Result<Vec<User>, ApiError> {
    sqlx::query_as::<_, User>("SELECT id, username FROM users ORDER BY id")
        .fetch_all(pool)
        .await
        .map_err(|e| ApiError::internal("Couldn't fetch users", e))
}

pub async fn get_user(pool: &AnyPool, key: &UserKey) -> Result<User, ApiError> {
    let query = match key {
        UserKey::Id(id) => {
            sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = $1").bind(*id)
        }
        UserKey::Username(username) => {
            sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE username = $1")
                .bind(username.clone())
        }
    };

    query
        .fetch_optional(pool)
        .await
        .map_err(|e| ApiError::internal("Couldn't fetch user", e))?
        .ok_or_else(user_not_found)
}

pub async fn delete_user(pool: &AnyPool, key: &UserKey) -> Result<(), ApiError> {
    let query = match key {
        UserKey::Id(id) => sqlx::query("DELETE FROM users WHERE id = $1").bind(*id),
        UserKey::Username(username) => {
            sqlx::query("DELETE FROM users WHERE username = $1").bind(username.clone())
        }
    };

    let result = query
        .execute(pool)
        .await
        .map_err(|e| ApiError::internal("Failed to delete user", e))?;

    if result.rows_affected() == 0 {
        return Err(user_not_found());
    }
    log::info!("deleted user {:?}", key);
    Ok(())
}
