use secrecy::SecretString;
use std::env;

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub groq_api_key: SecretString,
    pub groq_api_base: String,
    pub groq_model: String,
    pub content_engine_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        // The API key is the one hard startup requirement; everything else
        // has a workable default.
        let groq_api_key = lookup("GROQ_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Configuration(
                    "GROQ API Key is missing. Please set GROQ_API_KEY in the environment or .env file."
                        .to_string(),
                )
            })?;

        Ok(Self {
            groq_api_key: SecretString::from(groq_api_key),
            groq_api_base: lookup("GROQ_API_BASE")
                .unwrap_or_else(|| "https://api.groq.com/openai/v1".to_string()),
            groq_model: lookup("GROQ_MODEL")
                .unwrap_or_else(|| "llama-3.3-70b-versatile".to_string()),
            content_engine_url: lookup("CONTENT_ENGINE_URL")
                .unwrap_or_else(|| "http://localhost:8001".to_string()),
            web_server_host: lookup("WEB_SERVER_HOST")
                .unwrap_or_else(|| "localhost".to_string()),
            web_server_port: lookup("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            groq_api_key: SecretString::from("test-key".to_string()),
            groq_api_base: "https://api.groq.com/openai/v1".to_string(),
            groq_model: "llama-3.3-70b-versatile".to_string(),
            content_engine_url: "http://localhost:8001".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_missing_api_key_is_a_configuration_error() {
        let result = Config::from_lookup(lookup_from(&[]));

        let err = result.expect_err("config without GROQ_API_KEY should fail");
        assert!(matches!(err, AppError::Configuration(_)));
        assert!(err.to_string().contains("GROQ API Key is missing"));
    }

    #[test]
    fn test_blank_api_key_is_a_configuration_error() {
        let result = Config::from_lookup(lookup_from(&[("GROQ_API_KEY", "   ")]));

        assert!(matches!(result, Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_defaults_apply_when_only_api_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[("GROQ_API_KEY", "gsk_test")]))
            .expect("api key alone should be enough");

        assert_eq!(config.groq_api_base, "https://api.groq.com/openai/v1");
        assert_eq!(config.groq_model, "llama-3.3-70b-versatile");
        assert_eq!(config.content_engine_url, "http://localhost:8001");
        assert_eq!(config.web_server_port, 8080);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = Config::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("GROQ_MODEL", "llama-3.1-8b-instant"),
            ("WEB_SERVER_PORT", "9090"),
        ]))
        .expect("valid config");

        assert_eq!(config.groq_model, "llama-3.1-8b-instant");
        assert_eq!(config.web_server_port, 9090);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.web_server_host, "127.0.0.1");
        assert!(!config.groq_model.is_empty());
    }
}
