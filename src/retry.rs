//! Bounded retry with exponential backoff, shared by schema creation and seeding.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

/// Why [`RetryPolicy::run`] gave up.
#[derive(Debug)]
pub struct RetryError<E> {
    /// Attempts made, including the last one.
    pub attempts: u32,
    pub last: E,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        RetryPolicy {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Delay after the failed 0-based `attempt`: `base_delay * 2^attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Run `op` until it succeeds, the error is not `retryable`, or attempts run out.
    /// `op` receives the 0-based attempt number. No sleep follows the final attempt.
    pub async fn run<T, E, F, Fut, P>(&self, label: &str, mut op: F, retryable: P) -> Result<T, RetryError<E>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        P: Fn(&E) -> bool,
        E: Display,
    {
        let mut attempt = 0;
        loop {
            match op(attempt).await {
                Ok(v) => return Ok(v),
                Err(e) => {
                    let made = attempt + 1;
                    tracing::warn!(label, attempt = made, max_attempts = self.max_attempts, error = %e, "attempt failed");
                    if made >= self.max_attempts || !retryable(&e) {
                        return Err(RetryError { attempts: made, last: e });
                    }
                    tokio::time::sleep(self.delay_for(attempt)).await;
                    attempt = made;
                }
            }
        }
    }
}
