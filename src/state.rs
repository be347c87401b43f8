//! Shared application state for all routes.

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    /// Constructed at startup and owned by the lifecycle; handlers only borrow connections.
    pub store: Store,
}
