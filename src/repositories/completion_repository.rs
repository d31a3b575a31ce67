// src/repositories/completion_repository.rs

use chrono::{DateTime, Utc};
use sqlx::SqliteExecutor;

use crate::models::{completion::Completion, page::PAGE_SIZE};

pub async fn create<'e, E>(
    executor: E,
    quiz_id: i64,
    user_id: i64,
    completed_at: DateTime<Utc>,
) -> Result<Completion, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Completion>(
        r#"
        INSERT INTO completions (quiz_id, user_id, completed_at)
        VALUES (?, ?, ?)
        RETURNING id, quiz_id, user_id, completed_at
        "#,
    )
    .bind(quiz_id)
    .bind(user_id)
    .bind(completed_at)
    .fetch_one(executor)
    .await
}

/// One page of a user's completions, most recent first.
pub async fn find_page_by_user<'e, E>(
    executor: E,
    user_id: i64,
    offset: i64,
) -> Result<Vec<Completion>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, Completion>(
        r#"
        SELECT id, quiz_id, user_id, completed_at
        FROM completions
        WHERE user_id = ?
        ORDER BY completed_at DESC, id DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(user_id)
    .bind(PAGE_SIZE)
    .bind(offset)
    .fetch_all(executor)
    .await
}

pub async fn count_by_user<'e, E>(executor: E, user_id: i64) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM completions WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(executor)
        .await
}

pub async fn count_by_quiz<'e, E>(executor: E, quiz_id: i64) -> Result<i64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM completions WHERE quiz_id = ?")
        .bind(quiz_id)
        .fetch_one(executor)
        .await
}

/// Removes every completion of a quiz. Must run before the quiz itself is deleted.
pub async fn delete_all_by_quiz<'e, E>(executor: E, quiz_id: i64) -> Result<u64, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM completions WHERE quiz_id = ?")
        .bind(quiz_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
