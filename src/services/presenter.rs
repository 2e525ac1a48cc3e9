use crate::models::domain::{QuizQuestion, QuizType};

/// Renders the formatted plan under its display heading.
pub fn render_lesson_plan(formatted_plan: &str) -> String {
    format!("### Adapted Lesson Plan\n\n{formatted_plan}")
}

/// Renders quiz questions as Markdown display blocks, in original order.
///
/// Options are enumerated (1-based) only for multiple-choice quizzes; every
/// question block ends with a separator. Question content is passed through
/// untouched.
pub fn render_quiz(questions: &[QuizQuestion], quiz_type: QuizType) -> String {
    let mut output = String::from("### Quiz Questions\n");

    for (index, question) in questions.iter().enumerate() {
        output.push_str(&format!(
            "\n**Question {}:** {}\n",
            index + 1,
            question.question
        ));

        if quiz_type == QuizType::MultipleChoice {
            for (option_index, option) in question.options.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", option_index + 1, option));
            }
        }

        output.push_str(&format!(
            "**Correct Answer:** {}\n**Explanation:** {}\n\n---\n",
            question.answer, question.explanation
        ));
    }

    output
}
