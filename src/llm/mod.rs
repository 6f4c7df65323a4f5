//! LLM Abstraction Layer
//!
//! A provider-neutral request/response interface plus the OpenAI chat
//! completions client used to answer chat messages.

pub mod core;
pub mod openai;

// Re-export commonly used types
pub use self::core::{
    config::GenerationConfig,
    error::LlmError,
    provider::LlmProvider,
    types::{GenerateRequest, Message, MessageRole, UsageMetadata},
};

pub use openai::OpenAiClient;
