//! Chat messages and the decoded completion response.

use serde::{Deserialize, Serialize};

/// Role of the message sender.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    System,
    Assistant,
}

/// A single message in a conversation. Order within a conversation matters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }
}

/// Top-level body of a successful completion response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Response {
    pub result: CompletionResult,
}

impl Response {
    /// Text of the first alternative, if the model returned any.
    pub fn text(&self) -> Option<&str> {
        self.result
            .alternatives
            .first()
            .map(|alternative| alternative.message.text.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    pub alternatives: Vec<Alternative>,
    #[serde(default)]
    pub usage: Usage,
    #[serde(default)]
    pub model_version: String,
}

/// One candidate completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alternative {
    pub message: Message,
    /// Upstream status tag, e.g. `ALTERNATIVE_STATUS_FINAL`.
    pub status: String,
}

/// Token usage information. Counts arrive string-encoded and are kept that way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    #[serde(default)]
    pub input_text_tokens: String,
    #[serde(default)]
    pub completion_tokens: String,
    #[serde(default)]
    pub total_tokens: String,
}

impl Usage {
    pub fn input_text_tokens(&self) -> Option<u64> {
        self.input_text_tokens.parse().ok()
    }

    pub fn completion_tokens(&self) -> Option<u64> {
        self.completion_tokens.parse().ok()
    }

    pub fn total_tokens(&self) -> Option<u64> {
        self.total_tokens.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_wire_format() {
        let messages = vec![
            Message::system("be brief"),
            Message::user("hello"),
            Message::assistant("hi"),
        ];

        assert_eq!(
            serde_json::to_value(&messages).unwrap(),
            json!([
                { "role": "system", "text": "be brief" },
                { "role": "user", "text": "hello" },
                { "role": "assistant", "text": "hi" }
            ])
        );
    }

    #[test]
    fn test_decode_full_response() {
        let body = json!({
            "result": {
                "alternatives": [{
                    "message": { "role": "assistant", "text": "Paris" },
                    "status": "ALTERNATIVE_STATUS_FINAL"
                }],
                "usage": {
                    "inputTextTokens": "19",
                    "completionTokens": "2",
                    "totalTokens": "21"
                },
                "modelVersion": "23.10.2024"
            }
        });

        let response: Response = serde_json::from_value(body).unwrap();

        assert_eq!(response.text(), Some("Paris"));
        assert_eq!(response.result.alternatives[0].status, "ALTERNATIVE_STATUS_FINAL");
        assert_eq!(response.result.usage.input_text_tokens(), Some(19));
        assert_eq!(response.result.usage.completion_tokens(), Some(2));
        assert_eq!(response.result.usage.total_tokens(), Some(21));
        assert_eq!(response.result.model_version, "23.10.2024");
    }

    #[test]
    fn test_decode_without_usage() {
        let body = r#"{"result":{"alternatives":[{"message":{"role":"assistant","text":"hi"},"status":"ALTERNATIVE_STATUS_FINAL"}]}}"#;

        let response: Response = serde_json::from_str(body).unwrap();

        assert_eq!(response.text(), Some("hi"));
        assert_eq!(response.result.usage, Usage::default());
        assert_eq!(response.result.usage.total_tokens(), None);
        assert!(response.result.model_version.is_empty());
    }

    #[test]
    fn test_decode_rejects_unknown_role() {
        let body = r#"{"result":{"alternatives":[{"message":{"role":"robot","text":"hi"},"status":"x"}]}}"#;
        assert!(serde_json::from_str::<Response>(body).is_err());
    }

    #[test]
    fn test_text_of_empty_result() {
        let response = Response {
            result: CompletionResult::default(),
        };
        assert_eq!(response.text(), None);
    }
}
