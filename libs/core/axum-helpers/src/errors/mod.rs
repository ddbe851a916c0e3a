use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Uniform problem-detail error body.
///
/// Every non-404 failure response carries this shape, providing consistent
/// error information to clients:
/// - `status`: the numeric HTTP status
/// - `title`: short human-readable summary of the failure class
/// - `detail`: human-readable message for this occurrence
/// - `type`: URL-like reference for the status code
///
/// # JSON Example
///
/// ```json
/// {
///   "status": 400,
///   "title": "Invalid argument",
///   "detail": "Cannot sort products by lastName",
///   "type": "https://httpstatuses.com/400"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// Numeric HTTP status code
    pub status: u16,
    /// Short summary of the failure class
    pub title: String,
    /// Human-readable message for this occurrence
    pub detail: String,
    /// URL-like reference for the status code
    #[serde(rename = "type")]
    pub problem_type: String,
}

impl ProblemDetails {
    pub fn new(status: StatusCode, title: &str, detail: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            title: title.to_string(),
            detail: detail.into(),
            problem_type: format!("https://httpstatuses.com/{}", status.as_u16()),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// This is the single place deciding status codes and bodies for failures
/// that are not already handled by a specific route. Domain errors convert
/// into one of these variants via `From` impls in their own crates.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Caller supplied an unrecognized or malformed value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Resource absent; renders as 404 with an empty body
    #[error("Not Found")]
    NotFound,

    /// Anything unanticipated; the detail is logged, never returned
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidArgument(detail) => {
                tracing::warn!("Invalid argument: {}", detail);
                let problem =
                    ProblemDetails::new(StatusCode::BAD_REQUEST, "Invalid argument", detail);
                (StatusCode::BAD_REQUEST, Json(problem)).into_response()
            }
            // 404s are empty-bodied, preserved exactly for compatibility
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Internal(detail) => {
                // Deliberately generic detail so internals never leak
                tracing::error!("Internal error: {}", detail);
                let problem = ProblemDetails::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred",
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Json(problem)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_argument_renders_400_problem() {
        let response =
            AppError::InvalidArgument("Cannot sort products by lastName".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["title"], "Invalid argument");
        assert_eq!(body["detail"], "Cannot sort products by lastName");
        assert_eq!(body["type"], "https://httpstatuses.com/400");
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_internal_error_hides_the_cause() {
        let response = AppError::Internal("store exploded".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["status"], 500);
        assert_eq!(body["title"], "Internal Server Error");
        assert_eq!(body["detail"], "An unexpected error occurred");
        assert_eq!(body["type"], "https://httpstatuses.com/500");
    }
}
