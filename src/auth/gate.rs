//! Authentication gate
//!
//! Resolves the `Authorization: Bearer` header to a stored [`User`]. The gate
//! runs before the protected handler, so a rejected request never reaches it.

use warp::{Filter, Rejection};

use crate::error::ApiError;
use crate::models::User;
use crate::state::{with_state, AppState};

/// Extract the token from an `Authorization` header value
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(header: Option<&str>) -> Result<&str, ApiError> {
    let (scheme, token) = header
        .and_then(|value| value.trim().split_once(' '))
        .ok_or(ApiError::MissingToken)?;

    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(ApiError::MissingToken);
    }

    Ok(token)
}

/// Verify the bearer token and load the user it names
pub async fn authenticate(header: Option<&str>, state: &AppState) -> Result<User, ApiError> {
    let token = bearer_token(header)?;
    let claims = state.tokens.verify(token)?;

    state
        .store
        .find_by_email(&claims.email)
        .await?
        .ok_or(ApiError::UserNotFound)
}

/// Filter yielding the authenticated user, or rejecting with an [`ApiError`]
pub fn with_auth(state: AppState) -> impl Filter<Extract = (User,), Error = Rejection> + Clone {
    warp::header::optional::<String>("authorization")
        .and(with_state(state))
        .and_then(|header: Option<String>, state: AppState| async move {
            authenticate(header.as_deref(), &state)
                .await
                .map_err(warp::reject::custom)
        })
}
