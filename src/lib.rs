//! Read-only user directory API: pooled store, startup schema and seed, four GET routes.

pub mod config;
pub mod error;
pub mod handlers;
pub mod lifecycle;
pub mod migration;
pub mod model;
pub mod response;
pub mod retry;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

pub use config::{from_env, AppConfig, StoreOptions};
pub use error::{AppError, ConfigError};
pub use lifecycle::{Lifecycle, LifecyclePhase};
pub use migration::init_schema;
pub use model::{User, BASELINE_USERS};
pub use retry::RetryPolicy;
pub use routes::{app_router, common_routes, user_routes};
pub use seed::{seed_users, SeedOutcome};
pub use service::UserService;
pub use state::AppState;
pub use store::{Store, StoreKind};
