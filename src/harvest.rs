//! Single entry point composing both collectors and the deduplicator.

use chrono::{Local, NaiveDate};

use crate::app::{HarvestError, Result};
use crate::collector::Collector;
use crate::dedup::deduplicate;
use crate::domain::Article;

/// Runs the page collector, then the feed collector, then deduplicates.
pub struct Harvester {
    page: Box<dyn Collector>,
    feed: Box<dyn Collector>,
}

impl Harvester {
    pub fn new(page: Box<dyn Collector>, feed: Box<dyn Collector>) -> Self {
        Self { page, feed }
    }

    /// Collect for today's local date.
    pub async fn collect_all(&self, queries: &[String]) -> Result<Vec<Article>> {
        self.collect_all_on(queries, Local::now().date_naive()).await
    }

    /// Collect every query from both providers, page results ahead of feed
    /// results, and drop duplicate titles.
    ///
    /// Returns [`HarvestError::NoArticlesCollected`] when nothing survives;
    /// every other failure has already been absorbed by the collectors.
    pub async fn collect_all_on(
        &self,
        queries: &[String],
        run_date: NaiveDate,
    ) -> Result<Vec<Article>> {
        tracing::info!("=== Collection started: {} queries ===", queries.len());

        let page = self.page.collect(queries, run_date).await;
        let feed = self.feed.collect(queries, run_date).await;
        let (page_count, feed_count) = (page.len(), feed.len());

        let mut all = page;
        all.extend(feed);
        let deduped = deduplicate(all);

        tracing::info!(
            "=== Collection complete: {} {} + {} {} -> {} after dedup ===",
            self.page.source(),
            page_count,
            self.feed.source(),
            feed_count,
            deduped.len()
        );

        if deduped.is_empty() {
            return Err(HarvestError::NoArticlesCollected);
        }

        Ok(deduped)
    }
}
