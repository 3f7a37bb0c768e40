use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorEnvelope;

/// Failures raised while talking to an upstream service
#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {status} - {}", .message.as_deref().unwrap_or("no message"))]
    HttpError {
        status: u16,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn http(status: u16, message: Option<String>) -> Self {
        Self::HttpError { status, message }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    /// Status code reported by the upstream, if the failure got that far.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::HttpError { status, .. } => Some(*status),
            AppError::NetworkError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The `message` field of the upstream error body, if it carried one.
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            AppError::HttpError { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Error returned from a handler; always rendered as an [`ErrorEnvelope`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorEnvelope {
            error: self.message,
        });

        (self.status, body).into_response()
    }
}
