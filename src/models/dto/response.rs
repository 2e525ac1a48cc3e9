use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Difficulty, QuizQuestion, QuizType};

#[derive(Debug, Clone, Serialize)]
pub struct StudyPlanResponse {
    pub id: String,
    pub topic: String,
    pub num_days: u8,
    pub difficulty: Difficulty,
    /// Presenter output: the adapted plan rendered as Markdown.
    pub markdown: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub id: String,
    pub topic: String,
    pub quiz_type: QuizType,
    pub questions: Vec<QuizQuestion>,
    /// Presenter output: the question blocks rendered as Markdown.
    pub markdown: String,
    pub generated_at: DateTime<Utc>,
}
