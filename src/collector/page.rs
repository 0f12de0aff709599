use async_trait::async_trait;
use chrono::NaiveDate;
use url::Url;

use crate::app::Result;
use crate::collector::{build_url, page_offset, Collector};
use crate::domain::{Article, ParsedItem, RecordContext, Source};
use crate::fetcher::{PolitenessDelay, RequestGate};
use crate::normalizer::RecordNormalizer;
use crate::parser::PageParser;

/// Paginated HTML search-result provider.
///
/// Pages `0..max_pages` are fetched in order for each query. Pagination for
/// a query stops early on a network failure, on a page that yields no items,
/// or once `max_articles` items have been kept.
pub struct PageSource {
    gate: RequestGate,
    delay: PolitenessDelay,
    parser: PageParser,
    normalizer: RecordNormalizer,
    url_template: String,
    max_pages: usize,
    max_articles: usize,
}

impl PageSource {
    pub fn new(
        gate: RequestGate,
        delay: PolitenessDelay,
        url_template: impl Into<String>,
        max_pages: usize,
        max_articles: usize,
    ) -> Result<Self> {
        Ok(Self {
            gate,
            delay,
            parser: PageParser::new()?,
            normalizer: RecordNormalizer::new(),
            url_template: url_template.into(),
            max_pages,
            max_articles,
        })
    }

    async fn collect_query(&self, query: &str, run_date: NaiveDate) -> Vec<Article> {
        let ctx = RecordContext::new(query, Source::Page, run_date);
        let mut articles: Vec<Article> = Vec::new();

        for page in 0..self.max_pages {
            let url = build_url(&self.url_template, query, Some(page_offset(page)));

            let body = match self.gate.fetch(&url).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(
                        "[page] No response for query={}, page={}: {}",
                        query,
                        page + 1,
                        e
                    );
                    break;
                }
            };

            let items = self.parse_page(&body, &url);
            if items.is_empty() {
                tracing::debug!("[page] No results for query={}, page={}", query, page + 1);
                break;
            }

            let remaining = self.max_articles - articles.len();
            let mut page_articles = self.normalizer.normalize_all(items, &ctx);
            page_articles.truncate(remaining);
            articles.extend(page_articles);

            if articles.len() >= self.max_articles {
                break;
            }

            if page + 1 < self.max_pages {
                self.delay.pause().await;
            }
        }

        articles
    }

    fn parse_page(&self, body: &str, url: &str) -> Vec<ParsedItem> {
        match Url::parse(url) {
            Ok(base) => self.parser.parse(body, &base),
            Err(e) => {
                tracing::error!("[page] Unparseable page URL {}: {}", url, e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl Collector for PageSource {
    fn source(&self) -> Source {
        Source::Page
    }

    async fn collect(&self, queries: &[String], run_date: NaiveDate) -> Vec<Article> {
        let mut articles = Vec::new();

        for query in queries {
            tracing::info!("[page] Query: {}", query);

            let collected = self.collect_query(query, run_date).await;
            tracing::info!("[page] {} -> {} articles", query, collected.len());
            articles.extend(collected);

            self.delay.pause().await;
        }

        articles
    }
}
