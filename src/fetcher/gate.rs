use std::sync::Arc;

use crate::app::{HarvestError, Result};
use crate::fetcher::throttle::{backoff, Sleeper};
use crate::fetcher::Fetcher;

/// Retrying front door for every provider request.
///
/// Makes up to `max_attempts` GETs through the wrapped [`Fetcher`], sleeping
/// `2^attempt` seconds between attempts (never after the last one). Each
/// failed attempt is logged as a warning; exhausting all attempts yields
/// [`HarvestError::NetworkFailure`].
#[derive(Clone)]
pub struct RequestGate {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    sleeper: Arc<dyn Sleeper>,
    max_attempts: u32,
}

impl RequestGate {
    pub fn new(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        sleeper: Arc<dyn Sleeper>,
        max_attempts: u32,
    ) -> Self {
        Self {
            fetcher,
            sleeper,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub async fn fetch(&self, url: &str) -> Result<String> {
        for attempt in 1..=self.max_attempts {
            match self.fetcher.fetch(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    tracing::warn!(
                        "GET failed ({}/{}) {} - {}",
                        attempt,
                        self.max_attempts,
                        url,
                        e
                    );
                    if attempt < self.max_attempts {
                        self.sleeper.sleep(backoff(attempt)).await;
                    }
                }
            }
        }

        Err(HarvestError::NetworkFailure {
            url: url.to_string(),
            attempts: self.max_attempts,
        })
    }
}
