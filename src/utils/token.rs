use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::models::claims::Claims;

pub const TOKEN_TTL_HOURS: i64 = 24;

/// Signs an HS256 token for `username` that expires 24 hours from now.
pub fn issue_token(username: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        username: username.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Checks signature and expiry and returns the claims.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token = token.strip_prefix("Bearer ").unwrap_or(token);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    const SECRET: &str = "test-secret";

    #[test]
    fn issued_token_expires_after_a_day() {
        let token = issue_token("alice", SECRET).unwrap();
        let claims = verify_token(&token, SECRET).unwrap();

        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_HOURS * 60 * 60);
        assert!((claims.iat - Utc::now().timestamp()).abs() < 5);
    }

    #[test]
    fn bearer_prefix_is_accepted() {
        let token = issue_token("alice", SECRET).unwrap();
        let claims = verify_token(&format!("Bearer {}", token), SECRET).unwrap();
        assert_eq!(claims.username, "alice");
    }

    #[test]
    fn bearer_prefix_is_stripped_once() {
        let token = issue_token("alice", SECRET).unwrap();
        assert!(verify_token(&format!("Bearer Bearer {}", token), SECRET).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token("alice", SECRET).unwrap();
        let err = verify_token(&token, "other-secret").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = Claims {
            username: String::from("alice"),
            iat: (Utc::now() - Duration::hours(48)).timestamp(),
            exp: (Utc::now() - Duration::hours(24)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = verify_token(&token, SECRET).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }
}
