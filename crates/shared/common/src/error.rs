//! Unified error handling for the HTTP layer.
//!
//! Every error converts to a JSON response with a generic, user-facing
//! message. The full error chain travels with the response as an
//! [`ErrorReport`] extension so the site can expose it when error details
//! are enabled.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Rendering
    #[cfg(feature = "templates")]
    #[error("Template rendering failed")]
    Template(#[from] tera::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Full description of an error, attached to the response it produced.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ErrorReport {
    /// Build a response that includes the error detail.
    pub fn into_verbose_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.body })).into_response()
    }
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            #[cfg(feature = "templates")]
            AppError::Template(_) => "TEMPLATE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Hide details for internal errors
            #[cfg(feature = "templates")]
            AppError::Template(e) => {
                tracing::error!("Template error: {:?}", e);
                "The page could not be rendered".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }

    /// Full error description including every source in the chain.
    pub fn detail(&self) -> String {
        let mut detail = match self {
            AppError::Internal(msg) => msg.clone(),
            _ => self.to_string(),
        };

        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            detail.push_str(": ");
            detail.push_str(&err.to_string());
            source = err.source();
        }

        detail
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            code: self.code().to_string(),
            message: self.user_message(),
            detail: None,
        };
        let report = ErrorReport {
            status,
            body: ErrorBody {
                detail: Some(self.detail()),
                ..body.clone()
            },
        };

        let mut response = (status, Json(ErrorResponse { error: body })).into_response();
        response.extensions_mut().insert(report);
        response
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
