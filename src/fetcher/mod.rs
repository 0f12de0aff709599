pub mod gate;
pub mod http_fetcher;
pub mod throttle;

use async_trait::async_trait;

use crate::app::Result;

pub use gate::RequestGate;
pub use http_fetcher::HttpFetcher;
pub use throttle::{InstantSleeper, PolitenessDelay, Sleeper, TokioSleeper};

/// A single GET attempt. Retrying is the caller's business.
#[async_trait]
pub trait Fetcher {
    /// Fetch `url` and return the response body.
    ///
    /// Transport errors and non-2xx statuses are both errors.
    async fn fetch(&self, url: &str) -> Result<String>;
}
