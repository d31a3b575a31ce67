// src/models/completion.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'completions' table in the database.
/// One row per correct submission; re-solving adds another row.
#[derive(Debug, Clone, FromRow)]
pub struct Completion {
    pub id: i64,
    pub quiz_id: i64,
    pub user_id: i64,
    pub completed_at: DateTime<Utc>,
}

/// Entry of a user's completion history.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResponse {
    /// Id of the solved quiz.
    pub id: i64,
    pub completed_at: DateTime<Utc>,
}

impl From<Completion> for CompletionResponse {
    fn from(completion: Completion) -> Self {
        Self {
            id: completion.quiz_id,
            completed_at: completion.completed_at,
        }
    }
}
