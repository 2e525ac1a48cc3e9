pub mod request;
pub mod response;

pub use request::{GeneratePlanRequest, GenerateQuizRequest};
pub use response::{QuizResponse, StudyPlanResponse};
