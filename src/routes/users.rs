//! Read-only user routes.

use crate::handlers::{get_user, list_users};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:user_id", get(get_user))
        .with_state(state)
}
