use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        CompletionClient, ContentGenerator, GroqCompletionClient, HttpContentGenerator,
        QuizService, StudyPlanService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub study_plan_service: Arc<StudyPlanService>,
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let content_generator: Arc<dyn ContentGenerator> =
            Arc::new(HttpContentGenerator::new(&config));
        let completion_client: Arc<dyn CompletionClient> =
            Arc::new(GroqCompletionClient::new(&config));

        Self::with_collaborators(content_generator, completion_client, config)
    }

    /// Wires the services around explicit collaborators; the seam tests use
    /// to run the full HTTP surface against stubs.
    pub fn with_collaborators(
        content_generator: Arc<dyn ContentGenerator>,
        completion_client: Arc<dyn CompletionClient>,
        config: Config,
    ) -> Self {
        let study_plan_service = Arc::new(StudyPlanService::new(
            content_generator.clone(),
            completion_client,
        ));
        let quiz_service = Arc::new(QuizService::new(content_generator));

        Self {
            study_plan_service,
            quiz_service,
            config: Arc::new(config),
        }
    }
}
