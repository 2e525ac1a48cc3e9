use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::prompts::{compose_refinement_prompt, TEACHING_ASSISTANT_SYSTEM_PROMPT},
    errors::AppResult,
    models::dto::{GeneratePlanRequest, StudyPlanResponse},
    services::{
        completion_service::CompletionClient, content_service::ContentGenerator,
        formatter::format_lesson_plan, presenter::render_lesson_plan,
    },
};

/// Lesson-plan pipeline: request content, refine it, format it, render it.
///
/// Stateless; every call is an independent run.
pub struct StudyPlanService {
    content_generator: Arc<dyn ContentGenerator>,
    completion_client: Arc<dyn CompletionClient>,
}

impl StudyPlanService {
    pub fn new(
        content_generator: Arc<dyn ContentGenerator>,
        completion_client: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            content_generator,
            completion_client,
        }
    }

    pub async fn generate_plan(&self, request: GeneratePlanRequest) -> AppResult<StudyPlanResponse> {
        request.validate()?;

        let topic = request.topic.trim().to_string();
        log::info!("generating a {}-day study plan for '{topic}'", request.num_days);

        let raw_content = self.content_generator.generate_lesson_plan(&topic).await?;
        let raw_text = raw_content.into_text();

        let prompt =
            compose_refinement_prompt(&topic, request.num_days, request.difficulty, &raw_text);
        let refined = self
            .completion_client
            .complete(TEACHING_ASSISTANT_SYSTEM_PROMPT, &prompt)
            .await?;

        let formatted = format_lesson_plan(&refined);

        Ok(StudyPlanResponse {
            id: Uuid::new_v4().to_string(),
            topic,
            num_days: request.num_days,
            difficulty: request.difficulty,
            markdown: render_lesson_plan(&formatted),
            generated_at: Utc::now(),
        })
    }
}
