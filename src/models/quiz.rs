// src/models/quiz.rs

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

pub const CORRECT_FEEDBACK: &str = "Congratulations, you're right!";
pub const WRONG_FEEDBACK: &str = "Wrong answer! Please, try again.";

/// Represents the 'quizzes' table in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Quiz {
    pub id: i64,

    pub title: String,

    /// The question body.
    pub text: String,

    /// Choices shown to the solver, in display order.
    /// Stored as a JSON array in the database.
    pub options: Json<Vec<String>>,

    /// Zero-based indices of the correct options, sorted and distinct.
    pub answer: Json<Vec<i64>>,

    /// Id of the user who created the quiz.
    pub author_id: i64,
}

impl Quiz {
    /// Exact set equality between the stored answer and a submission.
    /// Order and repeated indices in the submission are ignored; indices
    /// that point at no option simply make the sets differ.
    pub fn is_correct(&self, submitted: &[i64]) -> bool {
        let expected: BTreeSet<i64> = self.answer.iter().copied().collect();
        let given: BTreeSet<i64> = submitted.iter().copied().collect();
        expected == given
    }
}

/// DTO for sending a quiz to a client. The answer is never exposed.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct QuizResponse {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub options: Vec<String>,
}

impl From<Quiz> for QuizResponse {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title,
            text: quiz.text,
            options: quiz.options.0,
        }
    }
}

/// DTO for creating a new quiz.
/// Missing fields default to empty so they fail validation with a 400.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "A quiz needs at least 2 options"))]
    pub options: Vec<String>,

    /// Write-only: indices of the correct options. Absent means none.
    #[serde(default)]
    pub answer: Option<Vec<i64>>,
}

impl CreateQuizRequest {
    /// Returns the answer as a sorted set, or the first index that does not
    /// point into `options`.
    pub fn normalized_answer(&self) -> Result<Vec<i64>, i64> {
        let set: BTreeSet<i64> = self.answer.iter().flatten().copied().collect();
        let out_of_range =
            |i: i64| usize::try_from(i).map_or(true, |i| i >= self.options.len());
        match set.iter().find(|&&i| out_of_range(i)) {
            Some(&bad) => Err(bad),
            None => Ok(set.into_iter().collect()),
        }
    }
}

/// DTO for submitting an answer to a quiz.
/// A missing or null `answer` is the empty selection.
#[derive(Debug, Default, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub answer: Option<Vec<i64>>,
}

impl SolveRequest {
    pub fn submitted(&self) -> &[i64] {
        self.answer.as_deref().unwrap_or(&[])
    }
}

/// Outcome of grading a submission.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SolveResult {
    pub success: bool,
    pub feedback: String,
}

impl SolveResult {
    pub fn correct() -> Self {
        Self {
            success: true,
            feedback: CORRECT_FEEDBACK.to_string(),
        }
    }

    pub fn wrong() -> Self {
        Self {
            success: false,
            feedback: WRONG_FEEDBACK.to_string(),
        }
    }
}
