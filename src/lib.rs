//! # yago - YandexGPT completion client
//!
//! A thin async client for the YandexGPT foundation model completion API.
//!
//! ## Architecture
//!
//! - **`Client`**: credentials, endpoint and the shared HTTP transport. Built once, reused.
//! - **`GenerativeModel`**: one named model bound to a client, with its own
//!   completion options and optional system instruction.
//! - **`generate`**: assembles the request, performs one HTTP exchange and
//!   decodes the response.
//!
//! ## Example
//! ```no_run
//! use std::time::Duration;
//! use yago::{Client, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder("your-api-key", "your-folder-id")
//!         .timeout(Duration::from_secs(60))
//!         .build();
//!
//!     let model = client
//!         .generative_model("yandexgpt-lite")
//!         .with_system_instruction("Answer in one word.")
//!         .with_temperature(0.3);
//!
//!     let response = model
//!         .generate(vec![Message::user("What is the capital of France?")])
//!         .await?;
//!
//!     println!("{:?}", response.text());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod generative;
pub mod http;
pub mod model;
pub mod options;

// Re-exports for convenience
pub use client::{Client, ClientBuilder, ClientError};
pub use generative::GenerativeModel;
pub use http::HttpTransport;
pub use model::{Alternative, CompletionResult, Message, Response, Role, Usage};
pub use options::{CompletionOptions, ReasoningMode, ReasoningOptions, SecretString};
