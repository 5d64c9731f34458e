use std::fmt::Display;
use std::future::Future;
use std::iter;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for connection attempts.
///
/// The default gives 5 retries, starting at 200ms and doubling up to 5s,
/// each delay jittered down to somewhere in 50-100% of its nominal value.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub multiplier: u32,
    pub use_jitter: bool,
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    /// Nominal wait before each retry, without jitter.
    pub fn schedule(&self) -> impl Iterator<Item = Duration> + '_ {
        iter::successors(Some(self.initial_delay.min(self.max_delay)), move |delay| {
            Some(delay.saturating_mul(self.multiplier).min(self.max_delay))
        })
        .take(self.max_retries as usize)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
            multiplier: 2,
            use_jitter: true,
        }
    }
}

/// Retry an async operation with exponential backoff.
///
/// Returns the first success, or the last error once the schedule runs out.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut schedule = config.schedule();
    let mut attempt: u32 = 1;

    loop {
        let error = match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(attempt, "Operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(e) => e,
        };

        let Some(delay) = schedule.next() else {
            warn!(attempts = attempt, error = %error, "Giving up");
            return Err(error);
        };
        let delay = if config.use_jitter {
            jitter(delay)
        } else {
            delay
        };

        warn!(
            attempt,
            max_retries = config.max_retries,
            error = %error,
            "Operation failed, retrying in {:?}",
            delay
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

/// Scales `delay` into [50%, 100%) using the hasher's random keys as entropy.
fn jitter(delay: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let percent = 50 + RandomState::new().hash_one(delay) % 50;
    delay * percent as u32 / 100
}
