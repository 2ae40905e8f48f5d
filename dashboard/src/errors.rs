use crate::api::validation::FieldErrors;
use crate::db::errors::DbError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error as ThisError;
use utoipa::ToSchema;

/// Summary message of every validation failure response
pub const VALIDATION_FAILED_MESSAGE: &str = "Missing or invalid fields. Failed to create invoice.";

/// How a store failure is reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorShape {
    /// `{ "success": false, "message": ... }`
    Envelope,
    /// `{ "error": ... }`, used by the customer lookup endpoint
    Bare,
}

#[derive(ThisError, Debug)]
pub enum Error {
    /// Request body failed validation
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },

    /// A store call failed. `message` is the fixed, caller-facing text; the cause is only logged.
    #[error("{message}")]
    Store {
        message: String,
        shape: ErrorShape,
        #[source]
        source: DbError,
    },

    /// The request body could not be read as JSON. Reported like a failed write, with a fixed message.
    #[error("{message}")]
    Body {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Generic internal service error
    #[error("Failed to {operation}")]
    Internal { operation: String },
}

/// `{ "success": false, "errors": {...}, "message": ... }`
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorEnvelope {
    pub success: bool,
    pub errors: FieldErrors,
    pub message: String,
}

/// `{ "success": false, "message": ... }`
#[derive(Debug, Serialize, ToSchema)]
pub struct FailureEnvelope {
    pub success: bool,
    pub message: String,
}

/// `{ "error": ... }`
#[derive(Debug, Serialize, ToSchema)]
pub struct BareError {
    pub error: String,
}

impl Error {
    pub fn validation(errors: FieldErrors) -> Self {
        Error::Validation {
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            errors,
        }
    }

    /// A store failure reported in the `success`/`message` envelope
    pub fn store(message: impl Into<String>, source: DbError) -> Self {
        Error::Store {
            message: message.into(),
            shape: ErrorShape::Envelope,
            source,
        }
    }

    /// A store failure reported as `{ "error": message }`
    pub fn store_bare(message: impl Into<String>, source: DbError) -> Self {
        Error::Store {
            message: message.into(),
            shape: ErrorShape::Bare,
            source,
        }
    }

    pub fn body(message: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Body {
            message: message.into(),
            source,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::Store { .. } | Error::Body { .. } | Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation { message, .. } => message.clone(),
            Error::Store { message, .. } | Error::Body { message, .. } => message.clone(),
            Error::Internal { .. } => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Store { message, source, .. } if source.is_constraint_violation() => {
                tracing::warn!(error = %source, "Database constraint error: {message}");
            }
            Error::Store { message, source, .. } => {
                tracing::error!(error = ?source, "Database error: {message}");
            }
            Error::Body { message, source } => {
                tracing::error!(error = %source, "Unreadable request body: {message}");
            }
            Error::Internal { .. } => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Validation { errors, .. } => {
                tracing::debug!(fields = ?errors, "Client error: {}", self);
            }
        }

        let status = self.status_code();
        let message = self.user_message();

        match self {
            Error::Validation { message, errors } => (
                status,
                Json(ValidationErrorEnvelope {
                    success: false,
                    errors,
                    message,
                }),
            )
                .into_response(),
            Error::Store {
                shape: ErrorShape::Bare, ..
            } => (status, Json(json!({ "error": message }))).into_response(),
            _ => (status, Json(FailureEnvelope { success: false, message })).into_response(),
        }
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
