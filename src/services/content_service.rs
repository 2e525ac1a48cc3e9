use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{QuizQuestion, QuizType, RawContent},
};

/// Content-generation collaborator.
///
/// Invoked once per request, synchronously from the caller's point of view;
/// a failure is fatal for that request. No retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_lesson_plan(&self, topic: &str) -> AppResult<RawContent>;

    async fn generate_questions(
        &self,
        topic: &str,
        quiz_type: QuizType,
        num_questions: u8,
    ) -> AppResult<Vec<QuizQuestion>>;
}

/// HTTP client for the content-engine service.
pub struct HttpContentGenerator {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct QuestionBatch {
    questions: Vec<QuizQuestion>,
}

impl HttpContentGenerator {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.content_engine_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ContentGenerator for HttpContentGenerator {
    async fn generate_lesson_plan(&self, topic: &str) -> AppResult<RawContent> {
        log::info!("requesting lesson plan content for topic '{topic}'");

        let response = self
            .http
            .post(format!("{}/api/content/lesson-plans", self.base_url))
            .json(&json!({ "topic": topic }))
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let value = response.json::<Value>().await?;
        Ok(RawContent::from_value(value))
    }

    async fn generate_questions(
        &self,
        topic: &str,
        quiz_type: QuizType,
        num_questions: u8,
    ) -> AppResult<Vec<QuizQuestion>> {
        log::info!("requesting {num_questions} {quiz_type} questions for topic '{topic}'");

        let response = self
            .http
            .post(format!("{}/api/content/questions", self.base_url))
            .json(&json!({
                "topic": topic,
                "question_type": quiz_type.to_string(),
                "num_questions": num_questions,
            }))
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let batch = response.json::<QuestionBatch>().await?;
        Ok(batch.questions)
    }
}

async fn ensure_success(response: reqwest::Response) -> AppResult<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::ContentEngine(format!(
        "content engine returned {status}: {body}"
    )))
}
