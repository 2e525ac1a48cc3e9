pub mod quiz;
pub mod raw_content;
pub mod study_plan;

pub use quiz::{QuizQuestion, QuizType};
pub use raw_content::RawContent;
pub use study_plan::Difficulty;
