pub mod completion_service;
pub mod content_service;
pub mod formatter;
pub mod presenter;
pub mod quiz_service;
pub mod study_plan_service;

pub use completion_service::{CompletionClient, GroqCompletionClient};
pub use content_service::{ContentGenerator, HttpContentGenerator};
pub use quiz_service::QuizService;
pub use study_plan_service::StudyPlanService;
