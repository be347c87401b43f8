//! Connection provisioning. The URL scheme selects the store: `sqlite:` is the embedded
//! file store, anything else is a remote PostgreSQL server that may be slow to wake up.

use crate::config::StoreOptions;
use crate::error::{AppError, ConfigError};
use sqlx::any::AnyPoolOptions;
use sqlx::pool::PoolConnection;
use sqlx::{Any, AnyPool};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Embedded,
    Remote,
}

impl StoreKind {
    pub fn from_url(database_url: &str) -> Self {
        if database_url.starts_with("sqlite") {
            StoreKind::Embedded
        } else {
            StoreKind::Remote
        }
    }
}

/// Pooled handle to the store. Cloning shares the pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: AnyPool,
    kind: StoreKind,
}

impl Store {
    /// Build the pool without opening a connection; the first acquire connects.
    /// Fails only on a malformed URL.
    pub fn connect(database_url: &str, opts: &StoreOptions) -> Result<Self, ConfigError> {
        sqlx::any::install_default_drivers();
        let kind = StoreKind::from_url(database_url);
        let pool = match kind {
            StoreKind::Embedded => {
                let url = embedded_url(database_url);
                embedded_pool_options(&url).connect_lazy(&url)
            }
            StoreKind::Remote => remote_pool_options(opts).connect_lazy(database_url),
        }
        .map_err(|e| ConfigError::Store(e.to_string()))?;
        tracing::info!(kind = ?kind, scheme = url_scheme(database_url), "store pool created");
        Ok(Store { pool, kind })
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Check out one connection. It goes back to the pool when dropped, on every exit path.
    pub async fn acquire(&self) -> Result<PoolConnection<Any>, AppError> {
        Ok(self.pool.acquire().await?)
    }

    /// Close idle connections and wait for checked-out ones to come back.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }
}

fn remote_pool_options(opts: &StoreOptions) -> AnyPoolOptions {
    // Opening a connection happens inside acquire, so the connect bound rides on the acquire deadline.
    let acquire_timeout = opts.acquire_timeout.max(opts.connect_timeout);
    AnyPoolOptions::new()
        .max_connections(opts.max_connections())
        .acquire_timeout(acquire_timeout)
        .test_before_acquire(opts.test_before_acquire)
        .max_lifetime(opts.recycle_after)
}

fn embedded_pool_options(url: &str) -> AnyPoolOptions {
    if is_in_memory(url) {
        // Every connection to `:memory:` is a separate database; keep exactly one alive.
        AnyPoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        AnyPoolOptions::new()
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Add `mode=rwc` to a file URL without an explicit mode so the file is created on first start.
pub fn embedded_url(database_url: &str) -> String {
    if is_in_memory(database_url) || database_url.contains("mode=") {
        return database_url.to_string();
    }
    let sep = if database_url.contains('?') { '&' } else { '?' };
    format!("{}{}mode=rwc", database_url, sep)
}

/// Scheme part of the URL, safe to log (no credentials).
pub fn url_scheme(database_url: &str) -> &str {
    database_url
        .split_once(':')
        .map(|(scheme, _)| scheme)
        .unwrap_or("unknown")
}
