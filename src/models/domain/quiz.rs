use serde::{Deserialize, Serialize};
use std::fmt;

/// A single generated quiz question, consumed read-only by the presenter.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    /// Present only for multiple-choice questions; order matters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizType {
    #[default]
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizType::MultipleChoice => write!(f, "Multiple Choice"),
            QuizType::TrueFalse => write!(f, "True/False"),
            QuizType::ShortAnswer => write!(f, "Short Answer"),
        }
    }
}
