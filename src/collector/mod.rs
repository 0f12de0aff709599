//! Per-provider collection loops.
//!
//! Both collectors run strictly sequentially: one query at a time and, for
//! the page provider, one page at a time, with a politeness delay after
//! network calls. Failures are logged and end the affected query only.

mod feed;
mod page;

pub use feed::FeedSource;
pub use page::PageSource;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Article, Source};

/// Results returned per page by the page provider.
pub const RESULTS_PER_PAGE: usize = 10;

#[async_trait]
pub trait Collector: Send + Sync {
    fn source(&self) -> Source;

    /// Collect articles for every query, in query order.
    async fn collect(&self, queries: &[String], run_date: NaiveDate) -> Vec<Article>;
}

/// Fill a provider URL template. `{query}` gets the percent-encoded query,
/// `{start}` (when given) the result offset.
pub fn build_url(template: &str, query: &str, start: Option<usize>) -> String {
    let url = template.replace("{query}", &urlencoding::encode(query));
    match start {
        Some(start) => url.replace("{start}", &start.to_string()),
        None => url,
    }
}

/// 1-based result offset of zero-based page `page`.
pub fn page_offset(page: usize) -> usize {
    page * RESULTS_PER_PAGE + 1
}
