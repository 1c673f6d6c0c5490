use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Failed to generate speech: {0}")]
    SpeechGeneration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// A single rejected field in a request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Error response body: a message plus optional detail
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::SpeechGeneration(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a malformed JSON body to a validation error.
    /// Bodies over the route's size limit are reported as 413 instead.
    pub fn from_json_rejection(message: &str, rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::PayloadTooLarge(format!("{}: request body is too large", message));
        }

        Self::Validation {
            message: message.to_string(),
            errors: vec![FieldError::new("body", rejection.body_text())],
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        match self {
            Self::Validation { message, errors } => ErrorResponse {
                message: message.clone(),
                error: None,
                errors: Some(errors.clone()),
            },
            Self::SpeechGeneration(detail) => ErrorResponse {
                message: "Failed to generate speech".to_string(),
                error: Some(detail.clone()),
                errors: None,
            },
            _ => ErrorResponse {
                message: self.to_string(),
                error: None,
                errors: None,
            },
        }
    }
}

/// Bad path parameters, such as a non-numeric id
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        if rejection.status().is_client_error() {
            AppError::BadRequest(rejection.body_text())
        } else {
            AppError::Internal(rejection.body_text())
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
