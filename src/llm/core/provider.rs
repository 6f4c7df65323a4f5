//! Provider trait for LLM implementations

use async_trait::async_trait;

use super::{error::LlmError, types::GenerateRequest};

/// Main interface that all LLM provider implementations must satisfy
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a single completion
    ///
    /// Sends one request and waits for the whole response. Returns the text
    /// of the first choice.
    ///
    /// # Arguments
    /// * `request` - The prompt messages and generation config
    async fn complete(&self, request: GenerateRequest) -> Result<String, LlmError>;
}
