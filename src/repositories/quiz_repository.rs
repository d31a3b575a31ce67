// src/repositories/quiz_repository.rs

use sqlx::{SqliteExecutor, types::Json};

use crate::models::{page::PAGE_SIZE, quiz::Quiz};

/// Field values for a quiz that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewQuiz {
    pub title: String,
    pub text: String,
    pub options: Vec<String>,
    pub answer: Vec<i64>,
    pub author_id: i64,
}

pub async fn create<'e, E>(executor: E, quiz: NewQuiz) -> Result<Quiz, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Quiz>(
        r#"
        INSERT INTO quizzes (title, text, options, answer, author_id)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, title, text, options, answer, author_id
        "#,
    )
    .bind(quiz.title)
    .bind(quiz.text)
    .bind(Json(quiz.options))
    .bind(Json(quiz.answer))
    .bind(quiz.author_id)
    .fetch_one(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Quiz>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Quiz>(
        "SELECT id, title, text, options, answer, author_id FROM quizzes WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// One page of quizzes in id (insertion) order.
pub async fn find_page<'e, E>(executor: E, offset: i64) -> Result<Vec<Quiz>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Quiz>(
        r#"
        SELECT id, title, text, options, answer, author_id
        FROM quizzes
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(PAGE_SIZE)
    .bind(offset)
    .fetch_all(executor)
    .await
}

pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM quizzes")
        .fetch_one(executor)
        .await
}

/// Returns the number of deleted rows (0 or 1).
pub async fn delete<'e, E>(executor: E, id: i64) -> Result<u64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM quizzes WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
