//! OpenAI client implementation

use async_trait::async_trait;
use reqwest::Client;

use crate::llm::core::{error::LlmError, provider::LlmProvider, types::GenerateRequest};

use super::mapper::{
    from_error_response, from_openai_response, parse_retry_after, to_openai_request, to_usage,
};
use super::types::ChatCompletionResponse;

/// Public OpenAI API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used for every chat completion
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Client for the OpenAI chat completions API
pub struct OpenAiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Secret API key sent as a bearer token
    api_key: String,
    /// API root, without trailing slash
    base_url: String,
    /// Model to use
    model: String,
}

impl OpenAiClient {
    /// Create a new OpenAI client for the default model
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Point the client at another API root, e.g. a proxy or a test server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the chat completions endpoint URL
    fn build_endpoint_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn complete(&self, request: GenerateRequest) -> Result<String, LlmError> {
        let body = to_openai_request(&self.model, request);

        let url = self.build_endpoint_url();
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = parse_retry_after(response.headers());
            let body = response.text().await.unwrap_or_default();
            return Err(from_error_response(status.as_u16(), retry_after, &body));
        }

        let text = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&text)?;

        if let Some(usage) = completion.usage.as_ref().map(to_usage) {
            tracing::debug!(
                model = %self.model,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "Completion finished"
            );
        }

        from_openai_response(completion)
    }
}
