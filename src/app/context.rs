use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{HarvestError, Result};
use crate::collector::{FeedSource, PageSource};
use crate::config::Config;
use crate::fetcher::{Fetcher, HttpFetcher, PolitenessDelay, RequestGate, Sleeper, TokioSleeper};
use crate::harvest::Harvester;
use crate::store::CsvStore;

pub struct AppContext {
    pub config: Config,
    pub harvester: Harvester,
    pub store: CsvStore,
}

impl AppContext {
    /// Production wiring: reqwest fetcher and real sleeps. `out_dir`
    /// overrides the configured output directory.
    pub fn new(config: Config, out_dir: Option<PathBuf>) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.http)?);
        Self::with_parts(config, fetcher, Arc::new(TokioSleeper), out_dir)
    }

    /// Wire the pipeline around a given fetcher and sleeper.
    pub fn with_parts(
        config: Config,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        sleeper: Arc<dyn Sleeper>,
        out_dir: Option<PathBuf>,
    ) -> Result<Self> {
        config
            .validate()
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        let gate = RequestGate::new(fetcher, sleeper.clone(), config.http.max_retries);
        let (min, max) = config.throttle.range();
        let delay = PolitenessDelay::new(min, max, sleeper);

        let page = PageSource::new(
            gate.clone(),
            delay.clone(),
            config.providers.page_url.clone(),
            config.crawl.max_pages_per_query,
            config.crawl.max_articles_per_query,
        )?;
        let feed = FeedSource::new(
            gate,
            delay,
            config.providers.feed_url.clone(),
            config.crawl.max_articles_per_query,
        );
        let harvester = Harvester::new(Box::new(page), Box::new(feed));

        let store = CsvStore::new(out_dir.unwrap_or_else(|| PathBuf::from(&config.output.dir)));

        Ok(Self {
            config,
            harvester,
            store,
        })
    }
}
