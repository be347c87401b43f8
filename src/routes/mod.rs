//! Router assembly.

mod common;
mod users;

pub use common::common_routes;
pub use users::user_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Full API: status and user routes, permissive CORS (any origin, method and header,
/// credentials allowed) and per-request tracing spans.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(user_routes(state))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
