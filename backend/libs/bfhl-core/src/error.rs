use std::any::Any;
use thiserror::Error;

use crate::models::ErrorResponse;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input format";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// The two ways a `/api/bfhl` request can fail.
///
/// The `Display` text carries detail for logs. Clients only ever see
/// [`BfhlError::public_message`].
#[derive(Debug, Error)]
pub enum BfhlError {
    /// Body is not an object whose `data` field is an array of strings.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BfhlError {
    pub fn invalid_input(detail: impl ToString) -> Self {
        Self::InvalidInput(detail.to_string())
    }

    pub fn internal(detail: impl ToString) -> Self {
        Self::Internal(detail.to_string())
    }

    /// Internal error from a panic payload caught while handling a request.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let detail = if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "unknown panic payload".to_string()
        };
        Self::Internal(format!("handler panicked: {detail}"))
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            BfhlError::InvalidInput(_) => INVALID_INPUT_MESSAGE,
            BfhlError::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            BfhlError::InvalidInput(_) => 400,
            BfhlError::Internal(_) => 500,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.public_message())
    }

    /// Emit the failure detail that the public message hides.
    pub fn log(&self) {
        match self {
            BfhlError::InvalidInput(detail) => {
                tracing::warn!(detail = %detail, "Rejected request body");
            }
            BfhlError::Internal(detail) => {
                tracing::error!(detail = %detail, "Request processing failed");
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BfhlError>;

// ============================================================================
// Actix-web Integration (feature = "actix")
// ============================================================================

#[cfg(feature = "actix")]
mod actix {
    use super::BfhlError;
    use actix_web::{http::StatusCode, HttpResponse, ResponseError};

    impl ResponseError for BfhlError {
        fn status_code(&self) -> StatusCode {
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }

        fn error_response(&self) -> HttpResponse {
            self.log();
            HttpResponse::build(self.status_code()).json(self.to_response())
        }
    }
}

// ============================================================================
// Axum Integration (feature = "axum")
// ============================================================================

#[cfg(feature = "axum")]
mod axum_integration {
    use super::BfhlError;
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Response},
        Json,
    };

    impl IntoResponse for BfhlError {
        fn into_response(self) -> Response {
            self.log();
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(self.to_response())).into_response()
        }
    }
}
