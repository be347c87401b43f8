//! Load [`AppConfig`] from the process environment.

use crate::config::types::*;
use crate::error::ConfigError;

/// Build config from `DATABASE_URL`, `HOST` and `PORT`. Missing variables fall back to defaults.
/// Call `dotenvy::dotenv()` first to pick up a `.env` file.
pub fn from_env() -> Result<AppConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Same as [`from_env`] with an injectable variable source.
pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let database_url = lookup("DATABASE_URL")
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
    let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into());
    let port = match lookup("PORT") {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
        None => DEFAULT_PORT,
    };
    Ok(AppConfig {
        database_url,
        host,
        port,
        store: StoreOptions::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_local_sqlite() {
        let cfg = from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn reads_overrides() {
        let cfg = from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://u:p@db.internal/app"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9001"),
        ]))
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://u:p@db.internal/app");
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9001");
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    }
}
