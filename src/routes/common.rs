//! Common routes: service banner and health.

use crate::handlers::{health, root};
use axum::{routing::get, Router};

/// GET / and GET /health. No state; they never touch the store.
pub fn common_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
