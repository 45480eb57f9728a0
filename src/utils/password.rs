use actix_web::web;

use crate::errors::ApiError;

/// Hashes on the blocking pool; bcrypt is deliberately slow.
pub async fn hash_password(password: String, cost: u32) -> Result<String, ApiError> {
    web::block(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| ApiError::internal("Failed to encrypt password", e))?
        .map_err(|e| ApiError::internal("Failed to encrypt password", e))
}

/// Returns `Ok(false)` on mismatch. A stored value that is not a bcrypt hash is
/// treated as a mismatch too, so callers cannot tell the two apart.
pub async fn verify_password(password: String, hashed: String) -> Result<bool, ApiError> {
    let result = web::block(move || bcrypt::verify(password, &hashed))
        .await
        .map_err(|e| ApiError::internal("Failed to verify password", e))?;

    match result {
        Ok(valid) => Ok(valid),
        Err(e) => {
            log::warn!("stored password hash could not be verified: {}", e);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn hash_round_trips_and_rejects_wrong_password() {
        let hashed = hash_password(String::from("secret1"), 4).await.unwrap();

        assert_ne!(hashed, "secret1");
        assert!(verify_password(String::from("secret1"), hashed.clone()).await.unwrap());
        assert!(!verify_password(String::from("wrong"), hashed).await.unwrap());
    }

    #[actix_rt::test]
    async fn garbage_hash_is_a_mismatch() {
        let valid = verify_password(String::from("secret1"), String::from("plaintext"))
            .await
            .unwrap();
        assert!(!valid);
    }
}
