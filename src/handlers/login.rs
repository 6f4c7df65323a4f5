// POST /login handler

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse};
use crate::state::AppState;
use crate::validation::is_valid_email;

pub async fn login_handler(
    request: LoginRequest,
    state: AppState,
) -> Result<impl warp::Reply, warp::Rejection> {
    let response = login(request, &state).await.map_err(warp::reject::custom)?;
    Ok(warp::reply::json(&response))
}

/// Check credentials and issue a token
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login(request: LoginRequest, state: &AppState) -> Result<LoginResponse, ApiError> {
    if !is_valid_email(&request.email) {
        return Err(ApiError::InvalidEmail);
    }

    let user = state.store.find_by_email(&request.email).await?;

    // Plain string comparison against the stored password
    match user {
        Some(user) if user.password == request.password => {}
        _ => return Err(ApiError::InvalidCredentials),
    }

    let token = state.tokens.issue(&request.email)?;

    tracing::info!(email = %request.email, "User logged in");
    Ok(LoginResponse {
        message: "Login successful".to_string(),
        token,
    })
}
