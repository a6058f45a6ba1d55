//! Unified API error handling with structured responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::profile::{ProfileError, REQUIRED_FIELDS};

/// API error type with structured responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Missing required fields")]
    MissingFields { required: Vec<String> },

    /// A store failure; `error` is the public summary and `message` the
    /// underlying cause.
    #[error("{error}")]
    Internal { error: String, message: String },
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn missing_fields() -> Self {
        Self::MissingFields {
            required: REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Wrap an unexpected failure under a public summary.
    pub fn internal(summary: impl Into<String>, err: &anyhow::Error) -> Self {
        Self::Internal {
            error: summary.into(),
            message: format!("{err:#}"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::MissingFields { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::MissingFields { .. } => "MISSING_FIELDS",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

/// Structured error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let summary = self.to_string();

        let (required, message) = match self {
            ApiError::Internal { message, .. } => {
                error!(error_code = code, message = %message, "{}", summary);
                (None, Some(message))
            }
            ApiError::MissingFields { required } => {
                debug!(error_code = code, "Client error: {}", summary);
                (Some(required), None)
            }
            _ => {
                debug!(error_code = code, "Client error: {}", summary);
                (None, None)
            }
        };

        let body = ErrorResponse {
            error: summary,
            code: code.to_string(),
            required,
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::MissingFields => ApiError::missing_fields(),
            ProfileError::InvalidSkillType { .. } => ApiError::BadRequest(err.to_string()),
            ProfileError::Storage(source) => ApiError::internal("Failed to save profile", &source),
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_error_response_status_codes() {
        assert_eq!(ApiError::not_found("").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::bad_request("").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::missing_fields().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::internal("boom", &anyhow::anyhow!("disk full")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_missing_fields_body_lists_required() {
        let (status, json) = body_json(ApiError::from(ProfileError::MissingFields)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Missing required fields");
        assert_eq!(
            json["required"],
            serde_json::json!(["email", "classYear", "interests", "skills", "goals"])
        );
        assert!(json.get("message").is_none());
    }

    #[tokio::test]
    async fn test_storage_error_carries_cause() {
        let source = anyhow::anyhow!("database is locked").context("inserting profile");
        let (status, json) = body_json(ApiError::from(ProfileError::Storage(source))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to save profile");
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["message"], "inserting profile: database is locked");
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, json) = body_json(ApiError::not_found("User not found")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "User not found");
        assert!(json.get("required").is_none());
    }
}
