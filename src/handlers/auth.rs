// src/handlers/auth.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::user::RegistrationRequest,
    services::user_service::{self, REGISTERED_MESSAGE},
    utils::extract::AppJson,
};

/// Registers a new user. The only endpoint reachable without credentials.
pub async fn register(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<RegistrationRequest>,
) -> Result<impl IntoResponse, AppError> {
    user_service::register(&pool, &payload).await?;

    Ok(Json(json!({ "message": REGISTERED_MESSAGE })))
}
