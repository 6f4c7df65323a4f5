//! Conversion between the core types and the OpenAI wire format

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};

use crate::llm::core::{
    error::LlmError,
    types::{GenerateRequest, MessageRole, UsageMetadata},
};

use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatUsage, ErrorEnvelope,
};

/// Build the request body for `model`
pub fn to_openai_request(model: &str, request: GenerateRequest) -> ChatCompletionRequest {
    let messages = request
        .messages
        .into_iter()
        .map(|m| ChatMessage {
            role: role_str(m.role).to_string(),
            content: m.content,
        })
        .collect();

    ChatCompletionRequest {
        model: model.to_string(),
        messages,
        max_tokens: request.config.max_tokens,
        temperature: request.config.temperature,
        top_p: request.config.top_p,
        stop: request.config.stop_sequences,
    }
}

fn role_str(role: MessageRole) -> &'static str {
    match role {
        MessageRole::System => "system",
        MessageRole::User => "user",
        MessageRole::Assistant => "assistant",
    }
}

/// Text of the first choice; a null content becomes an empty string
pub fn from_openai_response(response: ChatCompletionResponse) -> Result<String, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(LlmError::EmptyResponse)?;

    Ok(choice.message.content.unwrap_or_default())
}

pub fn to_usage(usage: &ChatUsage) -> UsageMetadata {
    UsageMetadata {
        input_tokens: usage.prompt_tokens,
        output_tokens: usage.completion_tokens,
    }
}

/// Map a non-2xx response to an error
pub fn from_error_response(status: u16, retry_after: Option<Duration>, body: &str) -> LlmError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok();

    match (status, envelope) {
        (429, envelope) => LlmError::RateLimitExceeded {
            retry_after,
            message: envelope.map_or_else(|| body.to_string(), |e| e.error.message),
        },
        (401, Some(envelope)) => LlmError::AuthenticationError(envelope.error.message),
        (401, None) => LlmError::AuthenticationError(body.to_string()),
        (_, Some(envelope)) => LlmError::ProviderError {
            code: envelope
                .error
                .code
                .or(envelope.error.error_type)
                .unwrap_or_else(|| status.to_string()),
            message: envelope.error.message,
        },
        (_, None) => LlmError::HttpError {
            status,
            body: body.to_string(),
        },
    }
}

/// Seconds form of the `retry-after` header
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
