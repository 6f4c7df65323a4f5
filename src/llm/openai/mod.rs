//! OpenAI provider implementation
//!
//! This module provides a client for the OpenAI chat completions API.

pub mod client;
pub mod mapper;
pub mod types;

// Re-export commonly used types
pub use client::{OpenAiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
