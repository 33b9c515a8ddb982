//! Simple YandexGPT example.
//!
//! Run with:
//! ```bash
//! export YANDEX_API_KEY="your-api-key"
//! export YANDEX_FOLDER_ID="your-folder-id"
//! RUST_LOG=yago=debug cargo run --example simple
//! ```

use std::time::Duration;
use tracing_subscriber::EnvFilter;
use yago::{Client, Message, Response};

fn print_response(response: &Response) {
    println!("\n=== Response ===");

    let usage = &response.result.usage;
    if let Some(input_tokens) = usage.input_text_tokens() {
        println!("Input tokens: {}", input_tokens);
    }
    if let Some(completion_tokens) = usage.completion_tokens() {
        println!("Completion tokens: {}", completion_tokens);
    }
    println!("Model version: {}", response.result.model_version);

    println!("\n=== Alternatives ===");
    for (i, alternative) in response.result.alternatives.iter().enumerate() {
        println!(
            "Alternative {} [{}]: {}",
            i + 1,
            alternative.status,
            alternative.message.text
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Get credentials from environment
    let api_key =
        std::env::var("YANDEX_API_KEY").expect("YANDEX_API_KEY environment variable must be set");
    let folder_id = std::env::var("YANDEX_FOLDER_ID")
        .expect("YANDEX_FOLDER_ID environment variable must be set");

    let client = Client::builder(api_key, folder_id)
        .timeout(Duration::from_secs(60))
        .build();

    let model = client
        .generative_model("yandexgpt-lite")
        .with_system_instruction("Answer in one word.")
        .with_temperature(0.3)
        .with_max_tokens(100);

    println!("Sending request to YandexGPT...");

    match model
        .generate(vec![Message::user("What is the capital of France?")])
        .await
    {
        Ok(response) => print_response(&response),
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(e.into());
        }
    }

    // Example with conversation history
    println!("\n\n=== Multi-turn conversation ===");

    let model = client.generative_model("yandexgpt");
    let conversation = vec![
        Message::user("My name is Alice."),
        Message::assistant("Hello Alice! Nice to meet you."),
        Message::user("What's my name?"),
    ];

    match model.generate(conversation).await {
        Ok(response) => print_response(&response),
        Err(e) => eprintln!("Error: {}", e),
    }

    client.close();
    Ok(())
}
