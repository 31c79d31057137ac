use crate::store::client::StoreError;
use rand::Rng;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Additional attempts after the first call.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
            max_jitter: Duration::from_millis(50),
        }
    }
}

impl RetryPolicy {
    /// Deterministic backoff component for a given attempt: base * 2^attempt.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }

    fn delay_for(&self, attempt: u32) -> Duration {
        let jitter_ms = rand::thread_rng().gen_range(0..=self.max_jitter.as_millis() as u64);
        self.backoff(attempt) + Duration::from_millis(jitter_ms)
    }
}

#[derive(Debug, Clone, Copy)]
struct RetryState {
    attempt: u32,
}

/// Re-invokes `op` while it fails with a transient fault, sleeping with
/// exponential backoff plus full jitter between attempts. Permanent faults
/// and exhausted retries propagate the failure unmodified. The sleep is
/// cooperative and never blocks other requests on the runtime.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, StoreError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, StoreError>>,
{
    let mut state = RetryState { attempt: 0 };
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() && state.attempt < policy.max_attempts => {
                let delay = policy.delay_for(state.attempt);
                tracing::warn!(
                    attempt = state.attempt + 1,
                    max_attempts = policy.max_attempts,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "transient store failure, backing off"
                );
                tokio::time::sleep(delay).await;
                state.attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
