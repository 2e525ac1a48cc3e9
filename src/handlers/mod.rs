pub mod health_handler;
pub mod plan_handler;
pub mod quiz_handler;

pub use health_handler::health_check;
pub use plan_handler::generate_plan;
pub use quiz_handler::generate_quiz;
