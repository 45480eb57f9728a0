use serde::Serialize;

/// A row of the `users` table without the password hash.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
}

#[derive(Serialize, Debug)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Serialize, Debug)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// Identifies a user either by numeric id or by username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserKey {
    Id(i64),
    Username(String),
}

impl UserKey {
    pub fn parse(raw: &str) -> UserKey {
        match raw.parse::<i64>() {
            Ok(id) => UserKey::Id(id),
            Err(_) => UserKey::Username(raw.to_string()),
        }
    }
}
