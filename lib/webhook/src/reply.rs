//! Response-shape normalization for webhook replies.
//!
//! Generation webhooks answer in whatever envelope their workflow
//! happens to produce: a bare string, `{"content": ...}`,
//! `{"output": ...}`, and so on. The reply is classified once by a parse
//! attempt and the display text extracted from a fixed priority order of
//! field names, falling back to the raw body.

use serde_json::{Map, Value as JsonValue};

/// Field names tried in order when the reply is a JSON object.
const CONTENT_FIELDS: &[&str] = &[
    "generatedContent",
    "content",
    "text",
    "output",
    "message",
    "result",
];

/// A webhook response body, classified by a single parse attempt.
///
/// A body that is valid JSON but not an object (a bare string, number,
/// or array) carries no named fields to probe and is treated as text.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookReply {
    /// The body parsed as a JSON object.
    Json(Map<String, JsonValue>),
    /// The body is plain text (or non-object JSON).
    Text(String),
}

impl WebhookReply {
    /// Classifies a response body.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<JsonValue>(body) {
            Ok(JsonValue::Object(map)) => Self::Json(map),
            _ => Self::Text(body.to_string()),
        }
    }
}

/// Extracts display text from a webhook response body.
///
/// For JSON objects, the first field in the priority order whose value
/// is a non-empty string wins; if none match, the raw body text is the
/// result. Non-JSON bodies are returned as-is - that is the normal case
/// for workflows that reply with plain text, not an error.
#[must_use]
pub fn extract_content(body: &str) -> String {
    match WebhookReply::parse(body) {
        WebhookReply::Json(map) => CONTENT_FIELDS
            .iter()
            .find_map(|field| {
                map.get(*field)
                    .and_then(JsonValue::as_str)
                    .filter(|s| !s.is_empty())
            })
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        WebhookReply::Text(text) => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_content_field() {
        assert_eq!(extract_content(r#"{"content":"Hello"}"#), "Hello");
    }

    #[test]
    fn extracts_each_known_field() {
        for field in CONTENT_FIELDS {
            let body = format!(r#"{{"{field}":"value"}}"#);
            assert_eq!(extract_content(&body), "value", "field {field}");
        }
    }

    #[test]
    fn respects_priority_order() {
        let body = r#"{"content":"second","generatedContent":"first"}"#;
        assert_eq!(extract_content(body), "first");
    }

    #[test]
    fn unknown_fields_fall_back_to_raw_body() {
        let body = r#"{"foo":"bar"}"#;
        assert_eq!(extract_content(body), body);
    }

    #[test]
    fn empty_string_fields_are_skipped() {
        let body = r#"{"generatedContent":"","content":"Hello"}"#;
        assert_eq!(extract_content(body), "Hello");
    }

    #[test]
    fn non_string_fields_are_skipped() {
        let body = r#"{"content":42,"text":"Hello"}"#;
        assert_eq!(extract_content(body), "Hello");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(extract_content("plain text reply"), "plain text reply");
    }

    #[test]
    fn non_object_json_passes_through_raw() {
        // Valid JSON, but nothing to probe for fields.
        assert_eq!(extract_content(r#"["a","b"]"#), r#"["a","b"]"#);
        assert_eq!(extract_content("42"), "42");
    }

    #[test]
    fn reply_classification() {
        assert!(matches!(
            WebhookReply::parse(r#"{"content":"x"}"#),
            WebhookReply::Json(_)
        ));
        assert!(matches!(
            WebhookReply::parse("not json"),
            WebhookReply::Text(_)
        ));
    }
}
