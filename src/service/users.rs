//! Single-table lookups. Each call checks out its own connection and returns it on drop,
//! including when the request future is cancelled mid-query.

use crate::error::AppError;
use crate::model::{User, USERS_TABLE};
use crate::store::Store;

pub struct UserService;

impl UserService {
    /// All users in the store's natural order (no ORDER BY).
    pub async fn list(store: &Store) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT id, name, email FROM {}", USERS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let mut conn = store.acquire().await?;
        let rows = sqlx::query_as::<_, User>(&sql).fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    /// User by primary key, or None.
    pub async fn find(store: &Store, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT id, name, email FROM {} WHERE id = $1", USERS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let mut conn = store.acquire().await?;
        let row = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }
}
