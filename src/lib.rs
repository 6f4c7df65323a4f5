// HTTP server modules
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod validation;

// Process configuration
pub mod config;

// Token issuing and the authentication gate
pub mod auth;

// User document store
pub mod store;

// LLM abstraction layer
pub mod llm;
