// POST /chat handler

use uuid::Uuid;

use crate::error::ApiError;
use crate::llm::GenerateRequest;
use crate::models::{ChatRequest, ChatResponse, User};
use crate::state::AppState;

pub async fn chat_handler(
    user: User,
    request: ChatRequest,
    state: AppState,
) -> Result<impl warp::Reply, warp::Rejection> {
    let response = chat(&user, request, &state)
        .await
        .map_err(warp::reject::custom)?;

    Ok(warp::reply::json(&response))
}

pub fn system_prompt(user: &User) -> String {
    format!("You are a helpful assistant for user {}.", user.name)
}

/// Forward one message to the provider and return its reply verbatim
pub async fn chat(user: &User, request: ChatRequest, state: &AppState) -> Result<ChatResponse, ApiError> {
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, email = %user.email, "Chat request");

    let prompt = GenerateRequest::new(system_prompt(user), request.message);
    let reply = state.llm.complete(prompt).await.map_err(|e| {
        tracing::warn!(%request_id, error = %e, "Completion failed");
        ApiError::from(e)
    })?;

    Ok(ChatResponse {
        user: user.name.clone(),
        reply,
    })
}
