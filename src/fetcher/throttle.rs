//! Wall-clock waits: retry backoff and politeness delays.
//!
//! Waiting goes through [`Sleeper`] so tests can observe the requested
//! durations without actually sleeping.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real waits on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Records requested waits and returns immediately.
#[derive(Debug, Clone, Default)]
pub struct InstantSleeper {
    slept: Arc<Mutex<Vec<Duration>>>,
}

impl InstantSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every duration requested so far, in order.
    pub fn recorded(&self) -> Vec<Duration> {
        self.slept.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, duration: Duration) {
        if let Ok(mut slept) = self.slept.lock() {
            slept.push(duration);
        }
    }
}

/// Randomized wait inserted after network calls to stay under provider rate limits.
#[derive(Clone)]
pub struct PolitenessDelay {
    min: Duration,
    max: Duration,
    sleeper: Arc<dyn Sleeper>,
}

impl PolitenessDelay {
    pub fn new(min: Duration, max: Duration, sleeper: Arc<dyn Sleeper>) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self { min, max, sleeper }
    }

    /// Draw a delay uniformly from the configured range, millisecond resolution.
    pub fn draw(&self) -> Duration {
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        let millis = rand::thread_rng().gen_range(min..=max);
        Duration::from_millis(millis)
    }

    pub async fn pause(&self) {
        let delay = self.draw();
        tracing::debug!("Politeness delay {:?}", delay);
        self.sleeper.sleep(delay).await;
    }
}

/// Wait before retrying after failed attempt `attempt` (1-based): `2^attempt` seconds.
pub fn backoff(attempt: u32) -> Duration {
    Duration::from_secs(2u64.saturating_pow(attempt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_is_pure_exponential() {
        assert_eq!(backoff(1), Duration::from_secs(2));
        assert_eq!(backoff(2), Duration::from_secs(4));
        assert_eq!(backoff(3), Duration::from_secs(8));
    }

    #[test]
    fn test_draw_stays_in_range() {
        let delay = PolitenessDelay::new(
            Duration::from_millis(1000),
            Duration::from_millis(3000),
            Arc::new(InstantSleeper::new()),
        );
        for _ in 0..200 {
            let d = delay.draw();
            assert!(d >= Duration::from_millis(1000) && d <= Duration::from_millis(3000));
        }
    }

    #[test]
    fn test_degenerate_range() {
        let delay = PolitenessDelay::new(
            Duration::from_millis(250),
            Duration::from_millis(250),
            Arc::new(InstantSleeper::new()),
        );
        assert_eq!(delay.draw(), Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_pause_goes_through_sleeper() {
        let sleeper = InstantSleeper::new();
        let delay = PolitenessDelay::new(
            Duration::from_millis(10),
            Duration::from_millis(20),
            Arc::new(sleeper.clone()),
        );
        delay.pause().await;
        delay.pause().await;

        let recorded = sleeper.recorded();
        assert_eq!(recorded.len(), 2);
        assert!(recorded
            .iter()
            .all(|d| *d >= Duration::from_millis(10) && *d <= Duration::from_millis(20)));
    }

    #[tokio::test]
    async fn test_tokio_sleeper_waits() {
        let start = tokio::time::Instant::now();
        TokioSleeper.sleep(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
