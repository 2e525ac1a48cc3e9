use crate::models::domain::Difficulty;

/// Fixed system instruction sent with every refinement request.
pub const TEACHING_ASSISTANT_SYSTEM_PROMPT: &str = "You are a helpful teaching assistant.";

/// Builds the instruction string sent to the completion model.
///
/// Deterministic: the same inputs always produce the same prompt. The raw
/// content is embedded verbatim so the model restructures rather than
/// reinvents it.
pub fn compose_refinement_prompt(
    topic: &str,
    num_days: u8,
    difficulty: Difficulty,
    raw_content: &str,
) -> String {
    format!(
        "You are a helpful assistant. Adapt the following lesson plan for {num_days} days at a {difficulty} difficulty level.\n\
         \n\
         Topic: {topic}\n\
         \n\
         Raw Lesson Plan:\n\
         {raw_content}\n\
         \n\
         Please structure the plan clearly and ensure it is well-distributed over {num_days} days."
    )
}
