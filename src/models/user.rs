// src/models/user.rs

use serde::Deserialize;
use sqlx::FromRow;
use std::sync::LazyLock;
use regex::Regex;
use validator::Validate;

/// Login names must look like `local@domain.tld`.
pub static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)@(.+\..+)$").expect("email pattern is valid"));

/// Represents the 'users' table in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,

    /// Unique login name (an email address).
    pub name: String,

    /// Argon2 password hash.
    pub password: String,
}

/// The authenticated caller of a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: i64,
    pub name: String,
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

/// DTO for creating a new user (Registration).
/// The email shape is checked against `EMAIL_PATTERN` by the service so the
/// rejection can quote the offending address.
#[derive(Debug, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 5, message = "Password should be at least 5 characters long"))]
    pub password: String,
}
