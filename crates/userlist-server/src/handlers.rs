//! HTTP handlers.

use axum::{extract::State, Json};

use userlist_core::User;

use crate::app_state::AppState;

/// `GET /users`: every record in the store, in store order.
///
/// Query string and body are ignored.
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let users = state.users().find_all().to_vec();
    tracing::debug!(count = users.len(), "listing users");
    Json(users)
}
