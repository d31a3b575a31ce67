// src/services/quiz_service.rs
//
// Quiz use cases. The caller's identity is always an explicit `Principal`
// argument resolved by the HTTP layer.

use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        completion::CompletionResponse,
        page::Page,
        quiz::{CreateQuizRequest, Quiz, QuizResponse, SolveResult},
        user::Principal,
    },
    repositories::{
        completion_repository,
        quiz_repository::{self, NewQuiz},
    },
};

/// Stores a new quiz authored by `principal`.
pub async fn create_quiz(
    pool: &SqlitePool,
    principal: &Principal,
    request: CreateQuizRequest,
) -> Result<QuizResponse, AppError> {
    request.validate()?;

    let answer = request
        .normalized_answer()
        .map_err(|i| AppError::BadRequest(format!("Answer index {} is out of range", i)))?;

    let quiz = quiz_repository::create(
        pool,
        NewQuiz {
            title: request.title,
            text: request.text,
            options: request.options,
            answer,
            author_id: principal.id,
        },
    )
    .await?;

    tracing::info!(quiz_id = quiz.id, author_id = principal.id, "Quiz created");
    Ok(quiz.into())
}

pub async fn get_quiz(pool: &SqlitePool, id: i64) -> Result<QuizResponse, AppError> {
    Ok(find_quiz(pool, id).await?.into())
}

/// Lists quizzes in insertion order, `PAGE_SIZE` at a time.
pub async fn list_quizzes(pool: &SqlitePool, page: i64) -> Result<Page<QuizResponse>, AppError> {
    let quizzes = quiz_repository::find_page(pool, Page::<Quiz>::offset(page)).await?;
    let total = quiz_repository::count(pool).await?;

    Ok(Page::new(quizzes, page, total).map(QuizResponse::from))
}

/// Grades a submission. A correct answer records a new completion every time.
pub async fn solve_quiz(
    pool: &SqlitePool,
    principal: &Principal,
    id: i64,
    submitted: &[i64],
) -> Result<SolveResult, AppError> {
    let quiz = find_quiz(pool, id).await?;

    if !quiz.is_correct(submitted) {
        return Ok(SolveResult::wrong());
    }

    let completion = completion_repository::create(pool, quiz.id, principal.id, Utc::now()).await?;
    tracing::info!(
        completion_id = completion.id,
        quiz_id = quiz.id,
        user_id = principal.id,
        "Quiz solved"
    );

    Ok(SolveResult::correct())
}

/// Deletes a quiz and all of its completions in one transaction.
/// Only the author may delete.
pub async fn delete_quiz(pool: &SqlitePool, principal: &Principal, id: i64) -> Result<(), AppError> {
    let quiz = find_quiz(pool, id).await?;

    if quiz.author_id != principal.id {
        return Err(AppError::Forbidden(
            "You are not authorized to delete this quiz".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    let purged = completion_repository::delete_all_by_quiz(&mut *tx, id).await?;
    let deleted = quiz_repository::delete(&mut *tx, id).await?;

    if deleted == 0 {
        // Removed concurrently between the lookup and the transaction.
        tx.rollback().await?;
        return Err(AppError::quiz_not_found(id));
    }

    tx.commit().await?;

    tracing::info!(quiz_id = id, completions = purged, "Quiz deleted");
    Ok(())
}

/// The caller's own completions, most recent first.
pub async fn list_completions(
    pool: &SqlitePool,
    principal: &Principal,
    page: i64,
) -> Result<Page<CompletionResponse>, AppError> {
    let completions =
        completion_repository::find_page_by_user(pool, principal.id, Page::<()>::offset(page))
            .await?;
    let total = completion_repository::count_by_user(pool, principal.id).await?;

    Ok(Page::new(completions, page, total).map(CompletionResponse::from))
}

async fn find_quiz(pool: &SqlitePool, id: i64) -> Result<Quiz, AppError> {
    quiz_repository::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::quiz_not_found(id))
}
