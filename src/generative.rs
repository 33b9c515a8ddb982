//! Model handles and the completion call.

use bytes::Bytes;
use nonempty::NonEmpty;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::client::{Client, ClientError};
use crate::model::{Message, Response};
use crate::options::{CompletionOptions, ReasoningMode};

const MODEL_URI_SCHEME: &str = "gpt://";

impl Client {
    /// Create a handle for the model `name` in this client's folder.
    ///
    /// `name` is not validated and ends up in the model URI verbatim.
    pub fn generative_model(&self, name: &str) -> GenerativeModel<'_> {
        GenerativeModel {
            client: self,
            model_uri: format!("{}{}/{}", MODEL_URI_SCHEME, self.folder_id(), name),
            completion_options: CompletionOptions::default(),
            system_instruction: String::new(),
        }
    }
}

/// A named model bound to a [`Client`], with its own completion options.
#[derive(Debug, Clone)]
pub struct GenerativeModel<'a> {
    client: &'a Client,
    model_uri: String,
    pub completion_options: CompletionOptions,
    /// Sent as a leading system message when non-empty.
    pub system_instruction: String,
}

impl<'a> GenerativeModel<'a> {
    pub fn model_uri(&self) -> &str {
        &self.model_uri
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.completion_options = self.completion_options.with_temperature(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u64) -> Self {
        self.completion_options = self.completion_options.with_max_tokens(max_tokens);
        self
    }

    pub fn with_reasoning_mode(mut self, mode: ReasoningMode) -> Self {
        self.completion_options = self.completion_options.with_reasoning_mode(mode);
        self
    }

    /// Send `messages` to the model and return the decoded response.
    ///
    /// Exactly one HTTP request is made. Dropping the returned future aborts it.
    pub async fn generate(&self, messages: Vec<Message>) -> Result<Response, ClientError> {
        self.send(messages, None).await
    }

    /// Like [`generate`](Self::generate), but gives up after `deadline` or
    /// the transport timeout, whichever is earlier. Expiry is reported as
    /// [`ClientError::Transport`].
    pub async fn generate_with_deadline(
        &self,
        messages: Vec<Message>,
        deadline: Duration,
    ) -> Result<Response, ClientError> {
        self.send(messages, Some(deadline)).await
    }

    fn build_messages(&self, messages: Vec<Message>) -> Result<NonEmpty<Message>, ClientError> {
        let system = Some(&self.system_instruction)
            .filter(|instruction| !instruction.is_empty())
            .map(|instruction| Message::system(instruction.as_str()));

        NonEmpty::collect(system.into_iter().chain(messages)).ok_or(ClientError::EmptyInput)
    }

    async fn send(
        &self,
        messages: Vec<Message>,
        deadline: Option<Duration>,
    ) -> Result<Response, ClientError> {
        let messages = self.build_messages(messages)?;
        let message_count = messages.len();

        let payload = CompletionRequest {
            model_uri: &self.model_uri,
            completion_options: &self.completion_options,
            messages,
        };
        let body = serde_json::to_vec(&payload).map_err(ClientError::Serialization)?;

        debug!(
            "Sending completion request for {} with {} messages to {}",
            self.model_uri,
            message_count,
            self.client.base_url()
        );

        let mut req = self
            .client
            .transport()
            .post(self.client.base_url())
            .header(CONTENT_TYPE, "application/json")
            .header(
                AUTHORIZATION,
                format!("Api-Key {}", self.client.api_key().expose_secret()),
            )
            .body(body);

        if let Some(deadline) = deadline {
            req = req.timeout(deadline.min(self.client.transport().timeout()));
        }

        let response = req.send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("Completion request for {} failed with {}", self.model_uri, status);
            return Err(ClientError::BadStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: Bytes = response.bytes().await.map_err(ClientError::DecodeBody)?;
        let response: Response = serde_json::from_slice(&body).map_err(ClientError::Decode)?;

        debug!(
            "Received {} alternatives from {}",
            response.result.alternatives.len(),
            self.model_uri
        );

        Ok(response)
    }
}

// --- Wire request ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletionRequest<'a> {
    model_uri: &'a str,
    completion_options: &'a CompletionOptions,
    messages: NonEmpty<Message>,
}
