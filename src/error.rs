//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::error_body;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
    #[error("store: {0}")]
    Store(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The pool could not hand out a live connection before its acquire timeout.
    #[error("timed out waiting for a database connection")]
    ConnectionTimeout,
    #[error("database: {0}")]
    Db(sqlx::Error),
    #[error("validation: {0}")]
    Validation(String),
    #[error("schema initialization failed after {attempts} attempts: {source}")]
    SchemaInit {
        attempts: u32,
        #[source]
        source: Box<AppError>,
    },
    #[error("seeding failed after {attempts} attempts: {source}")]
    Seed {
        attempts: u32,
        #[source]
        source: Box<AppError>,
    },
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut => AppError::ConnectionTimeout,
            other => AppError::Db(other),
        }
    }
}

impl AppError {
    /// True for a uniqueness violation reported by the store (a concurrent seeder won).
    pub fn is_unique_violation(&self) -> bool {
        match self {
            AppError::Db(sqlx::Error::Database(db)) => db.is_unique_violation(),
            _ => false,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::ConnectionTimeout => (StatusCode::INTERNAL_SERVER_ERROR, "connection_timeout"),
            AppError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::SchemaInit { .. } | AppError::Seed { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "startup_error")
            }
        };
        if status.is_server_error() {
            tracing::error!(code, error = %self, "request failed");
        }
        (status, Json(error_body(code, self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_maps_to_connection_timeout() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::ConnectionTimeout));
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn store_errors_are_server_errors() {
        let resp = AppError::ConnectionTimeout.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let resp = AppError::from(sqlx::Error::RowNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_is_unprocessable() {
        let resp = AppError::Validation("user_id must be an integer".into()).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
