// POST /register handler

use crate::error::ApiError;
use crate::models::{MessageResponse, RegisterRequest, User};
use crate::state::AppState;
use crate::validation::is_valid_email;

pub async fn register_handler(
    request: RegisterRequest,
    state: AppState,
) -> Result<impl warp::Reply, warp::Rejection> {
    let response = register(request, &state)
        .await
        .map_err(warp::reject::custom)?;

    Ok(warp::reply::json(&response))
}

/// Store a new user unless the email is taken
///
/// The lookup and the insert are separate store calls, so two concurrent
/// registrations of one email can both succeed.
pub async fn register(request: RegisterRequest, state: &AppState) -> Result<MessageResponse, ApiError> {
    if !is_valid_email(&request.email) {
        return Err(ApiError::InvalidEmail);
    }

    if state.store.find_by_email(&request.email).await?.is_some() {
        return Err(ApiError::DuplicateEmail);
    }

    let user = User::from(request);
    state.store.insert(&user).await?;

    tracing::info!(email = %user.email, "User registered");
    Ok(MessageResponse::new("User registered successfully"))
}
