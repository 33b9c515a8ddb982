//! Completion parameters and credential types.

use serde::{Deserialize, Serialize};

/// Temperature applied to freshly created model handles.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Token limit applied to freshly created model handles. The upstream API
/// caps it to the model's own maximum.
pub const DEFAULT_MAX_TOKENS: &str = "9999999";

/// A secret string type for sensitive data like API keys.
/// Prevents accidental logging or display of secrets.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Create a new secret string.
    pub fn new(s: String) -> Self {
        Self(s)
    }

    /// Get the underlying secret value.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

/// Whether the model reasons internally before answering.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasoningMode {
    #[default]
    Disabled,
    /// Reasoning is performed but not returned in the response.
    EnabledHidden,
}

#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReasoningOptions {
    pub mode: ReasoningMode,
}

/// Parameters sent as `completionOptions` with every request.
///
/// `max_tokens` stays a string because that is how the API encodes it.
/// `stream` is forwarded as-is; this client only reads complete responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOptions {
    pub stream: bool,
    pub temperature: f64,
    pub max_tokens: String,
    pub reasoning_options: ReasoningOptions,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            stream: false,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS.to_string(),
            reasoning_options: ReasoningOptions::default(),
        }
    }
}

impl CompletionOptions {
    /// Set the temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set maximum tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u64) -> Self {
        self.max_tokens = max_tokens.to_string();
        self
    }

    /// Set the reasoning mode.
    pub fn with_reasoning_mode(mut self, mode: ReasoningMode) -> Self {
        self.reasoning_options.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_completion_options_wire_format() {
        let value = serde_json::to_value(CompletionOptions::default()).unwrap();

        assert_eq!(
            value,
            json!({
                "stream": false,
                "temperature": 0.5,
                "maxTokens": "9999999",
                "reasoningOptions": { "mode": "DISABLED" }
            })
        );
    }

    #[test]
    fn test_builder_methods() {
        let options = CompletionOptions::default()
            .with_temperature(0.1)
            .with_max_tokens(2000)
            .with_reasoning_mode(ReasoningMode::EnabledHidden);

        assert_eq!(options.temperature, 0.1);
        assert_eq!(options.max_tokens, "2000");
        assert_eq!(
            serde_json::to_value(options.reasoning_options).unwrap(),
            json!({ "mode": "ENABLED_HIDDEN" })
        );
    }

    #[test]
    fn test_secret_string_is_redacted() {
        let secret = SecretString::from("super-secret-key");
        assert_eq!(format!("{:?}", secret), "SecretString([REDACTED])");
        assert_eq!(secret.expose_secret(), "super-secret-key");
    }
}
