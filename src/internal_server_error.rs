//! Defines the responses for unexpected server-side failures.
use std::any::Any;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{error::ErrorMessage, html::error_view};

/// The HTML page shown when the web UI hits an internal server error.
pub struct InternalServerError<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

impl InternalServerError<'_> {
    pub fn into_html(self) -> Html<String> {
        Html(error_view("Internal Server Error", "500", self.description, self.fix).into_string())
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.into_html()).into_response()
    }
}

/// Turn a panic in a route handler into a generic JSON 500 response.
///
/// The panic message is logged and never sent to the client.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        *message
    } else {
        "unknown panic message"
    };

    tracing::error!("A route handler panicked: {details}");

    ErrorMessage::response(
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorMessage::INTERNAL_SERVER_ERROR,
    )
}
