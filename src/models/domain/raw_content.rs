use serde_json::{Map, Value};

/// Decoded shape of a content-engine response.
///
/// Different engine versions return different payloads, so the boundary
/// decodes into one variant per recognized shape instead of probing the JSON
/// at every use site. An object carrying only a `content` or `plan` key is a
/// thin envelope and unwraps to the inner string; any richer object keeps its
/// full dictionary form. Everything else degrades to a string rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum RawContent {
    /// Full structured document; normalized as pretty-printed JSON.
    Document(Map<String, Value>),
    /// `{"content": "..."}` envelope.
    Content(String),
    /// `{"plan": "..."}` envelope.
    Plan(String),
    /// Unrecognized shape; normalized via string coercion, never an error.
    Opaque(Value),
}

const ENVELOPE_KEYS: [&str; 2] = ["content", "plan"];

impl RawContent {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                let envelope_only = map.keys().all(|key| ENVELOPE_KEYS.contains(&key.as_str()));
                if !envelope_only {
                    return RawContent::Document(map);
                }
                // `content` outranks `plan` when an envelope carries both.
                if let Some(Value::String(content)) = map.get("content") {
                    return RawContent::Content(content.clone());
                }
                if let Some(Value::String(plan)) = map.get("plan") {
                    return RawContent::Plan(plan.clone());
                }
                RawContent::Document(map)
            }
            other => RawContent::Opaque(other),
        }
    }

    /// Reduce to the single plain-text form fed into the refinement prompt.
    pub fn into_text(self) -> String {
        match self {
            RawContent::Document(map) => {
                let value = Value::Object(map);
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            }
            RawContent::Content(text) | RawContent::Plan(text) => text,
            RawContent::Opaque(Value::String(text)) => text,
            RawContent::Opaque(other) => other.to_string(),
        }
    }
}
