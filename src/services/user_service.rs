// src/services/user_service.rs

use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{EMAIL_PATTERN, Principal, RegistrationRequest},
    repositories::user_repository,
    utils::hash::{hash_password, verify_password},
};

pub const REGISTERED_MESSAGE: &str = "You have been successfully registered";

/// Registers a new user.
///
/// Rejects malformed emails, short passwords and names already taken,
/// all with 400. The password is stored only as an Argon2 hash.
pub async fn register(pool: &SqlitePool, request: &RegistrationRequest) -> Result<(), AppError> {
    if !EMAIL_PATTERN.is_match(&request.email) {
        return Err(AppError::BadRequest(format!("Invalid email: {}", request.email)));
    }
    request.validate()?;

    if user_repository::find_by_name(pool, &request.email).await?.is_some() {
        return Err(already_registered(&request.email));
    }

    let hashed_password = hash_password(&request.password)?;

    let user = user_repository::create(pool, &request.email, &hashed_password)
        .await
        .map_err(|e| {
            // Lost a race against a concurrent registration of the same name.
            if user_repository::is_duplicate_name(&e) {
                already_registered(&request.email)
            } else {
                tracing::error!("Failed to register user: {:?}", e);
                AppError::from(e)
            }
        })?;

    tracing::info!(user_id = user.id, "Registered user {}", user.name);
    Ok(())
}

/// Resolves a principal from a name and plaintext password.
///
/// Unknown names and wrong passwords produce the same 401 so callers
/// cannot tell which accounts exist.
pub async fn authenticate(
    pool: &SqlitePool,
    name: &str,
    password: &str,
) -> Result<Principal, AppError> {
    let invalid = || AppError::AuthError("Invalid credentials".to_string());

    let Some(user) = user_repository::find_by_name(pool, name).await? else {
        tracing::debug!("Authentication failed: unknown user {}", name);
        return Err(invalid());
    };

    if !verify_password(password, &user.password)? {
        tracing::debug!("Authentication failed: wrong password for {}", name);
        return Err(invalid());
    }

    Ok(Principal::from(user))
}

fn already_registered(email: &str) -> AppError {
    AppError::BadRequest(format!("User {} is already registered", email))
}
