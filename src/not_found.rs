//! Defines the responses for requests to routes that do not exist.
use axum::response::{IntoResponse, Response};

use crate::Error;

/// The fallback route handler, responds with a JSON 404 message.
pub async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}
