use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{Difficulty, QuizType};

fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    if topic.trim().is_empty() {
        let mut error = ValidationError::new("topic_required");
        error.message = Some("Please enter a topic.".into());
        return Err(error);
    }
    Ok(())
}

fn default_num_days() -> u8 {
    5
}

fn default_num_questions() -> u8 {
    5
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GeneratePlanRequest {
    #[validate(custom(function = validate_topic))]
    pub topic: String,

    #[serde(default = "default_num_days")]
    #[validate(range(min = 1, max = 30))]
    pub num_days: u8,

    #[serde(default)]
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(custom(function = validate_topic))]
    pub topic: String,

    #[serde(default)]
    pub quiz_type: QuizType,

    #[serde(default = "default_num_questions")]
    #[validate(range(min = 1, max = 20))]
    pub num_questions: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_plan_request() {
        let request = GeneratePlanRequest {
            topic: "Photosynthesis".to_string(),
            num_days: 3,
            difficulty: Difficulty::Medium,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_topic_is_rejected() {
        let request = GeneratePlanRequest {
            topic: "".to_string(),
            num_days: 5,
            difficulty: Difficulty::Easy,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_whitespace_only_topic_is_rejected() {
        let request = GeneratePlanRequest {
            topic: "   \t".to_string(),
            num_days: 5,
            difficulty: Difficulty::Easy,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_num_days_out_of_range_is_rejected() {
        let request = GeneratePlanRequest {
            topic: "Algebra".to_string(),
            num_days: 31,
            difficulty: Difficulty::Hard,
        };
        assert!(request.validate().is_err());

        let request = GeneratePlanRequest {
            topic: "Algebra".to_string(),
            num_days: 0,
            difficulty: Difficulty::Hard,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_plan_request_defaults() {
        let request: GeneratePlanRequest =
            serde_json::from_str(r#"{"topic": "Algebra"}"#).expect("request should parse");

        assert_eq!(request.num_days, 5);
        assert_eq!(request.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_valid_quiz_request() {
        let request = GenerateQuizRequest {
            topic: "World War II".to_string(),
            quiz_type: QuizType::TrueFalse,
            num_questions: 10,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_quiz_request_blank_topic_is_rejected() {
        let request = GenerateQuizRequest {
            topic: " ".to_string(),
            quiz_type: QuizType::MultipleChoice,
            num_questions: 5,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_num_questions_out_of_range_is_rejected() {
        let request = GenerateQuizRequest {
            topic: "Chemistry".to_string(),
            quiz_type: QuizType::ShortAnswer,
            num_questions: 21,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_quiz_request_defaults() {
        let request: GenerateQuizRequest =
            serde_json::from_str(r#"{"topic": "Chemistry"}"#).expect("request should parse");

        assert_eq!(request.num_questions, 5);
        assert_eq!(request.quiz_type, QuizType::MultipleChoice);
    }
}
