use async_trait::async_trait;
use chrono::NaiveDate;

use crate::collector::{build_url, Collector};
use crate::domain::{Article, RecordContext, Source};
use crate::fetcher::{PolitenessDelay, RequestGate};
use crate::normalizer::{parse_feed, RecordNormalizer};

/// Syndication-feed provider: one request per query, no pagination.
pub struct FeedSource {
    gate: RequestGate,
    delay: PolitenessDelay,
    normalizer: RecordNormalizer,
    url_template: String,
    max_articles: usize,
}

impl FeedSource {
    pub fn new(
        gate: RequestGate,
        delay: PolitenessDelay,
        url_template: impl Into<String>,
        max_articles: usize,
    ) -> Self {
        Self {
            gate,
            delay,
            normalizer: RecordNormalizer::new(),
            url_template: url_template.into(),
            max_articles,
        }
    }

    async fn collect_query(&self, query: &str, run_date: NaiveDate) -> Vec<Article> {
        let url = build_url(&self.url_template, query, None);

        let body = match self.gate.fetch(&url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("[feed] Fetch failed for query {}: {}", query, e);
                return Vec::new();
            }
        };

        let items = match parse_feed(body.as_bytes()) {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("[feed] Skipping query {}: {}", query, e);
                return Vec::new();
            }
        };

        let ctx = RecordContext::new(query, Source::Feed, run_date);
        let mut articles = self.normalizer.normalize_all(items, &ctx);
        articles.truncate(self.max_articles);
        articles
    }
}

#[async_trait]
impl Collector for FeedSource {
    fn source(&self) -> Source {
        Source::Feed
    }

    async fn collect(&self, queries: &[String], run_date: NaiveDate) -> Vec<Article> {
        let mut articles = Vec::new();

        for query in queries {
            tracing::info!("[feed] Query: {}", query);

            let collected = self.collect_query(query, run_date).await;
            tracing::info!("[feed] {} -> {} articles", query, collected.len());
            articles.extend(collected);

            self.delay.pause().await;
        }

        articles
    }
}
