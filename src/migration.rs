//! Create the `users` table and its indexes. Every statement is `IF NOT EXISTS`, so this
//! runs on each start.

use crate::error::AppError;
use crate::model::{EMAIL_MAX_LEN, NAME_MAX_LEN, USERS_TABLE};
use crate::retry::RetryPolicy;
use crate::store::{Store, StoreKind};

/// DDL for the store's dialect, in execution order.
pub fn users_ddl(kind: StoreKind) -> Vec<String> {
    // AUTOINCREMENT keeps SQLite from reusing ids of deleted rows.
    let id_col = match kind {
        StoreKind::Embedded => "INTEGER PRIMARY KEY AUTOINCREMENT",
        StoreKind::Remote => "BIGSERIAL PRIMARY KEY",
    };
    vec![
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {t} (
                id {id_col},
                name VARCHAR({name_len}) NOT NULL,
                email VARCHAR({email_len}) NOT NULL
            )
            "#,
            t = USERS_TABLE,
            id_col = id_col,
            name_len = NAME_MAX_LEN,
            email_len = EMAIL_MAX_LEN,
        ),
        format!("CREATE INDEX IF NOT EXISTS ix_{t}_id ON {t} (id)", t = USERS_TABLE),
        format!("CREATE INDEX IF NOT EXISTS ix_{t}_name ON {t} (name)", t = USERS_TABLE),
        format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS ix_{t}_email ON {t} (email)",
            t = USERS_TABLE
        ),
    ]
}

/// One attempt: run the DDL on a single checked-out connection.
pub async fn ensure_users_table(store: &Store) -> Result<(), AppError> {
    let mut conn = store.acquire().await?;
    for sql in users_ddl(store.kind()) {
        tracing::debug!(sql = %sql.trim(), "ddl");
        sqlx::query(&sql).execute(&mut *conn).await?;
    }
    Ok(())
}

/// Create the schema, retrying every failure per `policy`. The caller decides what an
/// `Err` means; startup treats it as degraded rather than fatal.
pub async fn init_schema(store: &Store, policy: &RetryPolicy) -> Result<(), AppError> {
    let result = policy
        .run(
            "schema",
            |attempt| {
                tracing::info!(attempt = attempt + 1, "initializing database schema");
                ensure_users_table(store)
            },
            |_| true,
        )
        .await;
    match result {
        Ok(()) => {
            tracing::info!(table = USERS_TABLE, "database tables ready");
            Ok(())
        }
        Err(e) => {
            tracing::error!(attempts = e.attempts, error = %e.last, "database initialization failed after all retries");
            Err(AppError::SchemaInit {
                attempts: e.attempts,
                source: Box::new(e.last),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fast_retry, temp_store};

    async fn table_sql(store: &Store) -> Vec<String> {
        sqlx::query_scalar("SELECT sql FROM sqlite_master WHERE tbl_name = 'users' ORDER BY name")
            .fetch_all(store.pool())
            .await
            .unwrap()
    }

    #[test]
    fn remote_dialect_uses_bigserial() {
        let ddl = users_ddl(StoreKind::Remote);
        assert!(ddl[0].contains("BIGSERIAL PRIMARY KEY"));
        assert!(ddl[3].starts_with("CREATE UNIQUE INDEX IF NOT EXISTS ix_users_email"));
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let (_dir, store) = temp_store();
        init_schema(&store, &fast_retry()).await.unwrap();
        let first = table_sql(&store).await;
        init_schema(&store, &fast_retry()).await.unwrap();
        let second = table_sql(&store).await;
        assert_eq!(first, second);
        // table, three explicit indexes
        assert_eq!(first.len(), 4);
    }

    #[tokio::test]
    async fn email_is_unique() {
        let (_dir, store) = temp_store();
        ensure_users_table(&store).await.unwrap();
        let insert = "INSERT INTO users (name, email) VALUES ($1, $2)";
        sqlx::query(insert)
            .bind("Alice Johnson")
            .bind("alice@example.com")
            .execute(store.pool())
            .await
            .unwrap();
        let err: AppError = sqlx::query(insert)
            .bind("Alice Again")
            .bind("alice@example.com")
            .execute(store.pool())
            .await
            .unwrap_err()
            .into();
        assert!(err.is_unique_violation());
    }

    #[tokio::test]
    async fn unreachable_store_exhausts_attempts() {
        let store = crate::test_support::unreachable_store();
        let err = init_schema(&store, &fast_retry()).await.unwrap_err();
        assert!(matches!(err, AppError::SchemaInit { attempts: 3, .. }));
    }
}
