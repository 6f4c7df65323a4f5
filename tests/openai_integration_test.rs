//! Live OpenAI test
//!
//! Requires `OPENAI_API_KEY` in the environment or a `.env` file.
//! Run with `cargo test --test openai_integration_test -- --ignored`.

use chat_relay::llm::{GenerateRequest, GenerationConfig, LlmProvider, OpenAiClient};

#[tokio::test]
#[ignore] // Run with --ignored flag since it requires an API key
async fn test_openai_live_completion() {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY required");
    let mut client = OpenAiClient::new(api_key).expect("Failed to create client");
    if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
        client = client.with_base_url(base_url);
    }

    let request = GenerateRequest::new(
        "You are a helpful assistant for user Ana.",
        "Reply with the single word: pong",
    )
    .with_config(GenerationConfig::default().with_max_tokens(10));

    let reply = client.complete(request).await.expect("Completion failed");

    println!("Reply: {}", reply);
    assert!(!reply.is_empty(), "Reply should not be empty");
}
