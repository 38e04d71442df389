//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

use crate::{
    AppState, endpoints,
    internal_server_error::handle_panic,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, create_transaction_form_endpoint, get_home_page,
        list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Unknown routes, and known routes with an unsupported method, get a JSON 404.
/// Panics in route handlers get a JSON 500.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().route(
        endpoints::TRANSACTIONS_API,
        get(list_transactions_endpoint).post(create_transaction_endpoint),
    );

    let view_routes = Router::new()
        .route(endpoints::HOME_VIEW, get(get_home_page))
        .route(
            endpoints::NEW_TRANSACTION_FORM,
            post(create_transaction_form_endpoint),
        );

    api_routes
        .merge(view_routes)
        .fallback(get_404_not_found)
        .method_not_allowed_fallback(get_404_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode, routing::get};
    use axum_test::TestServer;
    use serde_json::json;
    use tower_http::catch_panic::CatchPanicLayer;

    use crate::{AppState, build_router, endpoints, internal_server_error::handle_panic};

    fn get_test_server() -> TestServer {
        let state = AppState::new("Etc/UTC").expect("Could not create app state");

        TestServer::new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let server = get_test_server();

        let response = server.get("/does/not/exist").await;

        response.assert_status_not_found();
        response.assert_json(&json!({"message": "Not found"}));
    }

    #[tokio::test]
    async fn unsupported_method_is_json_not_found() {
        let server = get_test_server();

        let response = server.delete(endpoints::TRANSACTIONS_API).await;

        response.assert_status_not_found();
        response.assert_json(&json!({"message": "Not found"}));
    }

    #[tokio::test]
    async fn panicking_handler_is_generic_internal_server_error() {
        async fn panicking_handler() -> &'static str {
            panic!("database password is hunter2")
        }

        let app = Router::new()
            .route("/panic", get(panicking_handler))
            .layer(CatchPanicLayer::custom(handle_panic));
        let server = TestServer::new(app).expect("Could not create test server.");

        let response = server.get("/panic").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({"message": "Internal server error"}));
    }

    #[tokio::test]
    async fn home_page_is_served_at_root() {
        let server = get_test_server();

        server.get(endpoints::HOME_VIEW).await.assert_status_ok();
    }
}
