//! Insert the baseline users once per store, tolerating several processes racing to do it.
//!
//! Count-then-insert is not atomic across processes: two seeders can both see an empty
//! table. The unique email index makes the loser's batch fail as a whole; it rolls back,
//! backs off, and on the next attempt finds the winner's rows.

use crate::error::AppError;
use crate::model::{NewUser, BASELINE_USERS, USERS_TABLE};
use crate::retry::RetryPolicy;
use crate::store::Store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// This call inserted the baseline batch.
    Seeded { inserted: u64 },
    /// Rows were already present; nothing written.
    AlreadySeeded { existing: i64 },
}

/// `INSERT INTO users (name, email) VALUES ($1, $2), ($3, $4), ...` for `rows` rows.
fn batch_insert_sql(rows: usize) -> String {
    let values: Vec<String> = (0..rows)
        .map(|i| format!("(${}, ${})", 2 * i + 1, 2 * i + 2))
        .collect();
    format!(
        "INSERT INTO {} (name, email) VALUES {}",
        USERS_TABLE,
        values.join(", ")
    )
}

/// One attempt. Count and insert share a transaction; an error anywhere drops it, which
/// rolls back, so a batch lands whole or not at all.
pub async fn seed_once(store: &Store, users: &[NewUser]) -> Result<SeedOutcome, AppError> {
    let mut tx = store.pool().begin().await?;
    let existing: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", USERS_TABLE))
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tx.rollback().await?;
        return Ok(SeedOutcome::AlreadySeeded { existing });
    }

    let sql = batch_insert_sql(users.len());
    let mut query = sqlx::query(&sql);
    for u in users {
        query = query.bind(u.name).bind(u.email);
    }
    let inserted = query.execute(&mut *tx).await?.rows_affected();
    tx.commit().await?;
    Ok(SeedOutcome::Seeded { inserted })
}

/// Seed [`BASELINE_USERS`] with retries. Run only after the schema exists.
pub async fn seed_users(store: &Store, policy: &RetryPolicy) -> Result<SeedOutcome, AppError> {
    let result = policy
        .run("seed", |_| seed_once(store, &BASELINE_USERS), |_| true)
        .await;
    match result {
        Ok(outcome @ SeedOutcome::Seeded { inserted }) => {
            tracing::info!(inserted, "database seeded with baseline users");
            Ok(outcome)
        }
        Ok(outcome @ SeedOutcome::AlreadySeeded { existing }) => {
            tracing::info!(existing, "database already has users, skipping seed");
            Ok(outcome)
        }
        Err(e) => {
            tracing::error!(attempts = e.attempts, error = %e.last, "database seeding failed after all retries");
            Err(AppError::Seed {
                attempts: e.attempts,
                source: Box::new(e.last),
            })
        }
    }
}
