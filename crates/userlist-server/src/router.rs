//! Axum router wiring.
//!
//! Exposes a single `GET /users` route; anything else falls through to axum's
//! default 404 / 405 responses.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(handlers::list_users))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
