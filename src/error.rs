//! Defines the app level error type and conversions to JSON responses and rendered HTML pages.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{internal_server_error::InternalServerError, transaction::ValidationError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The client sent transaction data that failed validation.
    ///
    /// The store is never modified when this error is returned.
    #[error("{0}")]
    InvalidTransaction(#[from] ValidationError),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the transaction store lock.
    ///
    /// This happens when another thread panicked while holding the lock.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}

/// The JSON body sent to API clients when a request fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// A human-readable description of what went wrong.
    pub message: String,
}

impl ErrorMessage {
    /// The message sent for any error that is not the client's fault.
    pub const INTERNAL_SERVER_ERROR: &'static str = "Internal server error";
    /// The message sent for routes that do not exist.
    pub const NOT_FOUND: &'static str = "Not found";

    /// Create a JSON response with `status_code` and `message` as the body.
    pub fn response(status_code: StatusCode, message: &str) -> Response {
        (
            status_code,
            Json(ErrorMessage {
                message: message.to_owned(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTransaction(error) => {
                ErrorMessage::response(StatusCode::BAD_REQUEST, &error.to_string())
            }
            Error::NotFound => {
                ErrorMessage::response(StatusCode::NOT_FOUND, ErrorMessage::NOT_FOUND)
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorMessage::response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorMessage::INTERNAL_SERVER_ERROR,
                )
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with a full HTML page.
    pub fn into_html_response(self) -> Response {
        match self {
            Error::InvalidTimezone(timezone) => {
                tracing::error!("Invalid timezone {timezone}");
                InternalServerError {
                    description: "Invalid Timezone Settings",
                    fix: &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                        ensure the timezone has been set to valid, canonical timezone string"
                    ),
                }
                .into_response()
            }
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
