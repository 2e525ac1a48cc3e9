use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::AppResult,
    models::dto::{GenerateQuizRequest, QuizResponse},
    services::{content_service::ContentGenerator, presenter::render_quiz},
};

/// Quiz pipeline: request questions, render them. No refinement step and no
/// formatter on this path.
pub struct QuizService {
    content_generator: Arc<dyn ContentGenerator>,
}

impl QuizService {
    pub fn new(content_generator: Arc<dyn ContentGenerator>) -> Self {
        Self { content_generator }
    }

    pub async fn generate_quiz(&self, request: GenerateQuizRequest) -> AppResult<QuizResponse> {
        request.validate()?;

        let topic = request.topic.trim().to_string();
        log::info!(
            "generating a {}-question {} quiz for '{topic}'",
            request.num_questions,
            request.quiz_type
        );

        let questions = self
            .content_generator
            .generate_questions(&topic, request.quiz_type, request.num_questions)
            .await?;

        Ok(QuizResponse {
            id: Uuid::new_v4().to_string(),
            topic,
            quiz_type: request.quiz_type,
            markdown: render_quiz(&questions, request.quiz_type),
            questions,
            generated_at: Utc::now(),
        })
    }
}
