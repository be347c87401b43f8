//! Service settings: bind address, store URL and pool parameters.

use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub store: StoreOptions,
}

impl AppConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Pool parameters for a remote store. Ignored for the embedded store.
///
/// A remote store may be suspended while idle and take several seconds to wake up,
/// so every wait is bounded but generous.
#[derive(Clone, Debug)]
pub struct StoreOptions {
    /// Connections kept for steady load.
    pub pool_size: u32,
    /// Extra connections allowed on bursts, on top of `pool_size`.
    pub max_overflow: u32,
    /// Upper bound on waiting for a pooled connection.
    pub acquire_timeout: Duration,
    /// Upper bound on opening a new connection.
    pub connect_timeout: Duration,
    /// Connections older than this are closed and replaced.
    pub recycle_after: Duration,
    /// Ping a pooled connection before handing it out.
    pub test_before_acquire: bool,
}

impl StoreOptions {
    pub fn max_connections(&self) -> u32 {
        self.pool_size + self.max_overflow
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            pool_size: 2,
            max_overflow: 3,
            acquire_timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(60),
            recycle_after: Duration::from_secs(300),
            test_before_acquire: true,
        }
    }
}
