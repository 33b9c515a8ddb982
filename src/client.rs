//! Client configuration and error types.

use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::http::HttpTransport;
use crate::options::SecretString;

/// Foundation model completion endpoint used unless overridden.
pub const DEFAULT_BASE_URL: &str =
    "https://llm.api.cloud.yandex.net/foundationModels/v1/completion";

/// Request timeout used unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur during a generation call.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("empty message list")]
    EmptyInput,

    #[error("failed to marshal request: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status code {status}: {body}")]
    BadStatus { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The body of a 200 response could not be read to the end.
    #[error("failed to decode response: {0}")]
    DecodeBody(#[source] reqwest::Error),
}

/// Connection to the completion API.
///
/// Build once and share; model handles borrow it and the underlying transport
/// is safe to use from concurrent generation calls.
#[derive(Debug)]
pub struct Client {
    transport: HttpTransport,
    base_url: String,
    api_key: SecretString,
    folder_id: String,
}

impl Client {
    /// Create a client with the default endpoint and timeout.
    pub fn new(api_key: impl Into<SecretString>, folder_id: impl Into<String>) -> Self {
        Self::builder(api_key, folder_id).build()
    }

    /// Start configuring a client. Options apply in the order they are set.
    pub fn builder(
        api_key: impl Into<SecretString>,
        folder_id: impl Into<String>,
    ) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.into(),
            folder_id: folder_id.into(),
            options: Vec::new(),
        }
    }

    pub fn folder_id(&self) -> &str {
        &self.folder_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    pub(crate) fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Release this client's handle on the connection pool.
    ///
    /// Idle connections close once no request holds the pool any longer.
    /// Requests already in flight keep their own handle and run to completion.
    pub fn close(self) {
        debug!("Closing client for folder {}", self.folder_id);
        drop(self.transport);
    }
}

#[derive(Debug)]
enum ClientOption {
    BaseUrl(String),
    Transport(HttpTransport),
    Timeout(Duration),
}

/// Records client options and applies them in order on [`ClientBuilder::build`].
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: SecretString,
    folder_id: String,
    options: Vec<ClientOption>,
}

impl ClientBuilder {
    /// Send requests to `url` instead of the default endpoint.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.options.push(ClientOption::BaseUrl(url.into()));
        self
    }

    /// Replace the transport, including its timeout.
    pub fn transport(mut self, transport: HttpTransport) -> Self {
        self.options.push(ClientOption::Transport(transport));
        self
    }

    /// Set the timeout of whichever transport is current at this point.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.push(ClientOption::Timeout(timeout));
        self
    }

    pub fn build(self) -> Client {
        let mut client = Client {
            transport: HttpTransport::new(DEFAULT_TIMEOUT),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: self.api_key,
            folder_id: self.folder_id,
        };

        for option in self.options {
            match option {
                ClientOption::BaseUrl(url) => client.base_url = url,
                ClientOption::Transport(transport) => client.transport = transport,
                ClientOption::Timeout(timeout) => client.transport.set_timeout(timeout),
            }
        }

        client
    }
}
