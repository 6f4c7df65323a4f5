// HTTP-facing error taxonomy and rejection rendering

use std::convert::Infallible;

use thiserror::Error;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use crate::auth::TokenError;
use crate::llm::LlmError;
use crate::models::ErrorResponse;
use crate::store;

/// Failures surfaced to the caller as a status code and a `detail` string
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid token")]
    InvalidToken,

    /// No `Authorization: Bearer` header
    #[error("Not authenticated")]
    MissingToken,

    #[error("User not found")]
    UserNotFound,

    #[error("OpenAI error: {0}")]
    UpstreamError(String),

    #[error("value is not a valid email address")]
    InvalidEmail,

    /// Store or signing failure; the message is logged, not returned
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::DuplicateEmail => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials
            | ApiError::ExpiredToken
            | ApiError::InvalidToken
            | ApiError::MissingToken
            | ApiError::UserNotFound => StatusCode::UNAUTHORIZED,
            ApiError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UpstreamError(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl warp::reject::Reject for ApiError {}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => ApiError::ExpiredToken,
            TokenError::Invalid => ApiError::InvalidToken,
            TokenError::Signing(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<store::Error> for ApiError {
    fn from(err: store::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        ApiError::UpstreamError(err.to_string())
    }
}

fn error_reply(status: StatusCode, detail: impl Into<String>) -> warp::reply::WithStatus<warp::reply::Json> {
    let body = ErrorResponse {
        detail: detail.into(),
    };
    warp::reply::with_status(warp::reply::json(&body), status)
}

/// Render every rejection as `{"detail": ...}` with the matching status
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    if let Some(api_error) = err.find::<ApiError>() {
        match api_error {
            ApiError::Internal(msg) => tracing::error!(error = %msg, "Request failed"),
            ApiError::UpstreamError(msg) => tracing::warn!(error = %msg, "Upstream call failed"),
            _ => tracing::debug!(error = %api_error, "Request rejected"),
        }
        return Ok(error_reply(api_error.status(), api_error.to_string()));
    }

    if err.is_not_found() {
        return Ok(error_reply(StatusCode::NOT_FOUND, "Not Found"));
    }

    if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        return Ok(error_reply(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()));
    }

    if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        return Ok(error_reply(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Unsupported Media Type",
        ));
    }

    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(error_reply(
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed",
        ));
    }

    tracing::error!(rejection = ?err, "Unhandled rejection");
    Ok(error_reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::DuplicateEmail.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::ExpiredToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::MissingToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::UserNotFound.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidEmail.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            ApiError::UpstreamError("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_detail_carries_provider_message() {
        let err: ApiError = LlmError::ProviderError {
            code: "insufficient_quota".to_string(),
            message: "You exceeded your current quota".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "OpenAI error: Provider error (insufficient_quota): You exceeded your current quota"
        );
    }

    #[test]
    fn test_internal_detail_hides_cause() {
        let err: ApiError = store::Error::PoolError("connection refused".to_string()).into();
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn test_token_error_mapping() {
        assert!(matches!(ApiError::from(TokenError::Expired), ApiError::ExpiredToken));
        assert!(matches!(ApiError::from(TokenError::Invalid), ApiError::InvalidToken));
    }
}
