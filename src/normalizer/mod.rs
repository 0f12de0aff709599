//! Mapping provider items into the unified [`Article`] schema.

pub mod feed;

pub use feed::parse_feed;

use scraper::Html;

use crate::domain::{Article, ParsedItem, RecordContext};

/// Separator between a headline and the publisher name in feed titles.
const PUBLISHER_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Copy, Default)]
pub struct RecordNormalizer;

impl RecordNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Build an [`Article`] from a parsed item and its origin.
    ///
    /// All string fields are trimmed. A missing `published` falls back to the
    /// run date. Items whose title is empty after trimming are dropped.
    pub fn normalize(&self, item: ParsedItem, ctx: &RecordContext<'_>) -> Option<Article> {
        let title = item.title.trim();
        if title.is_empty() {
            return None;
        }

        let published = item
            .published
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .unwrap_or_else(|| ctx.run_date_string());

        Some(Article {
            date: ctx.run_date,
            source: ctx.source,
            query: ctx.query.trim().to_string(),
            title: title.to_string(),
            description: item.description.trim().to_string(),
            link: item.link.trim().to_string(),
            published,
        })
    }

    pub fn normalize_all(&self, items: Vec<ParsedItem>, ctx: &RecordContext<'_>) -> Vec<Article> {
        items
            .into_iter()
            .filter_map(|item| self.normalize(item, ctx))
            .collect()
    }
}

/// Drop a trailing publisher name: everything from the last `" - "` onward.
pub fn strip_publisher_suffix(title: &str) -> &str {
    match title.rsplit_once(PUBLISHER_SEPARATOR) {
        Some((headline, _)) => headline,
        None => title,
    }
}

/// Plain text of an HTML fragment with whitespace collapsed.
pub fn strip_markup(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text = fragment
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&text)
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
