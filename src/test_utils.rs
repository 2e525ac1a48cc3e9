use crate::models::domain::QuizQuestion;
