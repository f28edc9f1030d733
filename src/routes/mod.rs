/// Application routes configuration
use crate::handlers::{
    create_user_request, delete_user_request, get_user_request, health, list_user_requests,
    AppState,
};
use axum::{extract::DefaultBodyLimit, routing::get, Router};

/// Build the application router with all routes
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // User request intake
        .route(
            "/user-requests",
            get(list_user_requests).post(create_user_request),
        )
        .route(
            "/user-requests/:id",
            get(get_user_request).delete(delete_user_request),
        )
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
