use serde::Deserialize;

use crate::errors::ApiError;
use crate::models::user::UserKey;

/// Body of `/register` and `/login`.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Trims the username and checks that both fields are present.
    pub fn validated(mut self) -> Result<Credentials, ApiError> {
        self.username = self.username.trim().to_string();
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ApiError::InvalidInput(String::from("Invalid input")));
        }
        Ok(self)
    }

    /// Also rejects usernames that `/users/{id}` would read as an id.
    pub fn validated_for_registration(self) -> Result<Credentials, ApiError> {
        let credentials = self.validated()?;
        if let UserKey::Id(_) = UserKey::parse(&credentials.username) {
            return Err(ApiError::InvalidInput(String::from(
                "Username cannot be a number",
            )));
        }
        Ok(credentials)
    }
}
