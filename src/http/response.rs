//! Structured error responses.
//!
//! Every failure leaves the service as `{"error": "..."}` with a 4xx or 5xx
//! status. In debug mode a `detail` field carries the underlying cause.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use thiserror::Error;

use crate::calc::CalcError;

/// Errors returned by the HTTP handlers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Malformed or missing payload, or non-numeric values.
    #[error("{message}")]
    BadRequest {
        message: String,
        detail: Option<String>,
    },

    /// Unexpected fault while processing.
    #[error("{message}")]
    Internal {
        message: String,
        detail: Option<String>,
    },
}

/// Wire form of an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiError {
    /// Classify a calculation error; `verbose` keeps the cause in the body.
    pub fn from_calc(err: CalcError, verbose: bool) -> Self {
        let detail = verbose.then(|| err.detail());
        let message = err.to_string();
        if err.is_client_error() {
            ApiError::BadRequest { message, detail }
        } else {
            ApiError::Internal { message, detail }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_body(self) -> ErrorBody {
        match self {
            ApiError::BadRequest { message, detail } | ApiError::Internal { message, detail } => {
                ErrorBody { error: message, detail }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, Json(self.into_body())).into_response()
    }
}

/// Turn a handler panic into a 500 error body instead of dropping the connection.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let cause = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::Internal {
        message: format!("internal error: {cause}"),
        detail: None,
    }
    .into_response()
}

/// Replace the timeout layer's empty 408 with a structured 500.
pub async fn timeout_response(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    ApiError::Internal {
        message: "internal error: request timed out".to_string(),
        detail: None,
    }
    .into_response()
}
