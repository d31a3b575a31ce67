// src/handlers/quiz.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        page::PageParams,
        quiz::{CreateQuizRequest, SolveRequest},
        user::Principal,
    },
    services::quiz_service,
    utils::extract::{AppJson, AppQuery},
};

/// Creates a quiz owned by the caller.
/// Returns the stored quiz without its answer.
pub async fn create_quiz(
    State(pool): State<SqlitePool>,
    Extension(principal): Extension<Principal>,
    AppJson(payload): AppJson<CreateQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = quiz_service::create_quiz(&pool, &principal, payload).await?;
    Ok(Json(quiz))
}

pub async fn get_quiz(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = quiz_service::get_quiz(&pool, id).await?;
    Ok(Json(quiz))
}

/// `GET /api/quizzes?page=N`
pub async fn list_quizzes(
    State(pool): State<SqlitePool>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = quiz_service::list_quizzes(&pool, params.number()?).await?;
    Ok(Json(page))
}

/// Grades the submitted option indices.
/// Both outcomes are 200; `success` tells them apart.
pub async fn solve_quiz(
    State(pool): State<SqlitePool>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<SolveRequest>,
) -> Result<impl IntoResponse, AppError> {
    let result = quiz_service::solve_quiz(&pool, &principal, id, payload.submitted()).await?;
    Ok(Json(result))
}

/// Deletes a quiz along with its completions.
/// Requires: caller is the author.
pub async fn delete_quiz(
    State(pool): State<SqlitePool>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    quiz_service::delete_quiz(&pool, &principal, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/quizzes/completed?page=N`
pub async fn list_completions(
    State(pool): State<SqlitePool>,
    Extension(principal): Extension<Principal>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = quiz_service::list_completions(&pool, &principal, params.number()?).await?;
    Ok(Json(page))
}
