//! Bounded retry with backoff.
//!
//! Sleeping goes through [`Sleeper`] so callers can swap the real clock for one
//! that records delays, or that simulates an interruption.

use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Returned by a [`Sleeper`] when the wait was cut short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = Result<(), Interrupted>> + Send;
}

/// Sleeps on the tokio timer, giving up early once `cancel` fires.
#[derive(Debug, Clone, Default)]
pub struct TokioSleeper {
    cancel: CancellationToken,
}

impl TokioSleeper {
    pub fn new(cancel: CancellationToken) -> Self {
        Self { cancel }
    }
}

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) -> Result<(), Interrupted> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(Interrupted),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// `step * attempt` after each failed attempt (1-based).
    Linear(Duration),
    Fixed(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Backoff,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Backoff) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Delay to wait after `attempt` failed.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Linear(step) => step * attempt,
            Backoff::Fixed(delay) => delay,
        }
    }
}

impl Default for RetryPolicy {
    /// Three attempts, waiting 1s then 2s between them.
    fn default() -> Self {
        Self::new(3, Backoff::Linear(Duration::from_millis(1000)))
    }
}

#[derive(Debug)]
pub enum RetryError<E> {
    /// Every attempt failed; carries the last failure.
    Exhausted { attempts: u32, last: E },
    /// A backoff was interrupted after `attempts` failures.
    Interrupted { attempts: u32, last: E },
}

/// Runs `op` until it succeeds or the policy's attempts run out.
///
/// `op` receives the 1-based attempt number.
pub async fn retry_with_backoff<T, E, F, Fut, S>(
    policy: &RetryPolicy,
    sleeper: &S,
    mut op: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    S: Sleeper,
    E: std::fmt::Display,
{
    let mut attempt = 0;

    loop {
        attempt += 1;

        let last = match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        if attempt >= policy.max_attempts {
            return Err(RetryError::Exhausted { attempts: attempt, last });
        }

        let delay = policy.delay_after(attempt);
        log::info!("Backing off for {} ms before retry...", delay.as_millis());
        if sleeper.sleep(delay).await.is_err() {
            log::warn!("Backoff interrupted after attempt {}: {}", attempt, last);
            return Err(RetryError::Interrupted { attempts: attempt, last });
        }
    }
}
