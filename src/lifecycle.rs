//! Startup and shutdown sequencing: schema, then seed, then serve.
//!
//! ```text
//! NotStarted -> Initializing -> Seeding -> Ready -> ShuttingDown -> Stopped
//!                     \-> InitFailed (degraded, still serving) -> ShuttingDown
//! ```
//!
//! Startup never fails the process. A store that cannot be initialized leaves the
//! service up in `InitFailed`; store-backed routes then answer with server errors.

use std::sync::RwLock;

use crate::migration::init_schema;
use crate::retry::RetryPolicy;
use crate::seed::seed_users;
use crate::state::AppState;
use crate::store::Store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecyclePhase {
    NotStarted,
    Initializing,
    /// Schema creation exhausted its retries; seeding was skipped.
    InitFailed,
    Seeding,
    Ready,
    ShuttingDown,
    Stopped,
}

/// Owns the store handle for the life of the process.
pub struct Lifecycle {
    store: Store,
    retry: RetryPolicy,
    phase: RwLock<LifecyclePhase>,
}

impl Lifecycle {
    pub fn new(store: Store) -> Self {
        Lifecycle {
            store,
            retry: RetryPolicy::default(),
            phase: RwLock::new(LifecyclePhase::NotStarted),
        }
    }

    /// Override the backoff used for schema creation and seeding.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn phase(&self) -> LifecyclePhase {
        match self.phase.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Handler state sharing this lifecycle's pool.
    pub fn app_state(&self) -> AppState {
        AppState {
            store: self.store.clone(),
        }
    }

    fn enter(&self, next: LifecyclePhase) {
        let mut guard = match self.phase.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        tracing::info!(from = ?*guard, to = ?next, "lifecycle transition");
        *guard = next;
    }

    /// Run schema creation and seeding. Call before binding the listener.
    /// Returns the phase reached: `Ready` or `InitFailed`.
    pub async fn start(&self) -> LifecyclePhase {
        tracing::info!("application starting up");
        self.enter(LifecyclePhase::Initializing);
        if init_schema(&self.store, &self.retry).await.is_err() {
            tracing::error!("failed to initialize database - app may not work correctly");
            self.enter(LifecyclePhase::InitFailed);
            return LifecyclePhase::InitFailed;
        }

        self.enter(LifecyclePhase::Seeding);
        // Ready either way; a peer may have seeded already.
        match seed_users(&self.store, &self.retry).await {
            Ok(outcome) => tracing::debug!(?outcome, "seed step finished"),
            Err(e) => tracing::warn!(error = %e, "continuing without seed data"),
        }
        self.enter(LifecyclePhase::Ready);
        LifecyclePhase::Ready
    }

    /// Release pooled connections. Nothing is buffered, so there is nothing to flush.
    pub async fn shutdown(&self) {
        tracing::info!("application shutting down");
        self.enter(LifecyclePhase::ShuttingDown);
        self.store.close().await;
        self.enter(LifecyclePhase::Stopped);
    }
}
