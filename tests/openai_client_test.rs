//! OpenAI client tests against a local stub server

use std::time::Duration;

use chat_relay::llm::{GenerateRequest, GenerationConfig, LlmError, LlmProvider, OpenAiClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> OpenAiClient {
    OpenAiClient::new("sk-test")
        .expect("Failed to create client")
        .with_base_url(format!("{}/v1", server.uri()))
}

fn completion_body(content: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "gpt-4o-mini-2024-07-18",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 20, "completion_tokens": 2, "total_tokens": 22 }
    })
}

#[tokio::test]
async fn test_complete_sends_expected_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_json(json!({
            "model": "gpt-4o-mini",
            "messages": [
                { "role": "system", "content": "You are a helpful assistant for user Ana." },
                { "role": "user", "content": "hi" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!("hello"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let reply = client
        .complete(GenerateRequest::new(
            "You are a helpful assistant for user Ana.",
            "hi",
        ))
        .await
        .expect("completion should succeed");

    assert_eq!(reply, "hello");
}

#[tokio::test]
async fn test_complete_forwards_generation_config() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(wiremock::matchers::body_partial_json(json!({
            "max_tokens": 32,
            "temperature": 0.5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!("ok"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let request = GenerateRequest::new("sys", "hi").with_config(
        GenerationConfig::default()
            .with_max_tokens(32)
            .with_temperature(0.5),
    );

    assert_eq!(client.complete(request).await.unwrap(), "ok");
}

#[tokio::test]
async fn test_complete_null_content_is_empty_reply() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(json!(null))))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let reply = client.complete(GenerateRequest::new("sys", "hi")).await.unwrap();

    assert_eq!(reply, "");
}

#[tokio::test]
async fn test_complete_no_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.complete(GenerateRequest::new("sys", "hi")).await;

    assert!(matches!(result, Err(LlmError::EmptyResponse)));
}

#[tokio::test]
async fn test_complete_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "This model's maximum context length is 128000 tokens.",
                "type": "invalid_request_error",
                "param": "messages",
                "code": "context_length_exceeded"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .complete(GenerateRequest::new("sys", "hi"))
        .await
        .unwrap_err();

    match err {
        LlmError::ProviderError { code, message } => {
            assert_eq!(code, "context_length_exceeded");
            assert!(message.contains("maximum context length"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_complete_invalid_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Incorrect API key provided: sk-test.",
                "type": "invalid_request_error",
                "code": "invalid_api_key"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .complete(GenerateRequest::new("sys", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::AuthenticationError(ref msg) if msg.contains("Incorrect API key")));
}

#[tokio::test]
async fn test_complete_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "20")
                .set_body_json(json!({
                    "error": { "message": "Rate limit reached", "type": "requests", "code": "rate_limit_exceeded" }
                })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .complete(GenerateRequest::new("sys", "hi"))
        .await
        .unwrap_err();

    match err {
        LlmError::RateLimitExceeded {
            retry_after,
            message,
        } => {
            assert_eq!(retry_after, Some(Duration::from_secs(20)));
            assert_eq!(message, "Rate limit reached");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_complete_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .complete(GenerateRequest::new("sys", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::SerializationError(_)));
}

#[tokio::test]
async fn test_complete_unreachable_host() {
    // Port 1 is reserved and nothing listens there
    let client = OpenAiClient::new("sk-test")
        .unwrap()
        .with_base_url("http://127.0.0.1:1/v1");

    let err = client
        .complete(GenerateRequest::new("sys", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::HttpError { status: 0, .. }));
}
