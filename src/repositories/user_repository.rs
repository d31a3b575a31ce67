// src/repositories/user_repository.rs

use sqlx::SqliteExecutor;

use crate::models::user::User;

pub async fn find_by_name<'e, E>(executor: E, name: &str) -> Result<Option<User>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, User>("SELECT id, name, password FROM users WHERE name = ?")
        .bind(name)
        .fetch_optional(executor)
        .await
}

/// Inserts a user whose password is already hashed and returns the stored row.
pub async fn create<'e, E>(executor: E, name: &str, password_hash: &str) -> Result<User, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, password)
        VALUES (?, ?)
        RETURNING id, name, password
        "#,
    )
    .bind(name)
    .bind(password_hash)
    .fetch_one(executor)
    .await
}

/// True when the error is a violation of the `users.name` uniqueness constraint.
pub fn is_duplicate_name(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
