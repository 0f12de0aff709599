use feed_rs::model::Entry;
use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::{HarvestError, Result};
use crate::domain::ParsedItem;
use crate::normalizer::{strip_markup, strip_publisher_suffix};

/// Parse an RSS/Atom response into items, in document order.
pub fn parse_feed(body: &[u8]) -> Result<Vec<ParsedItem>> {
    let feed = parser::parse(body).map_err(|e| HarvestError::FeedParse(e.to_string()))?;
    Ok(feed.entries.into_iter().map(entry_to_item).collect())
}

fn entry_to_item(entry: Entry) -> ParsedItem {
    let raw_title = entry
        .title
        .map(|t| decode_html_entities(&t.content).trim().to_string())
        .unwrap_or_default();
    let title = strip_publisher_suffix(&raw_title).to_string();

    let description = entry
        .summary
        .map(|s| strip_markup(&s.content))
        .unwrap_or_default();

    let link = entry
        .links
        .first()
        .map(|l| l.href.clone())
        .unwrap_or_default();

    let mut item = ParsedItem::new(title, link).with_description(description);
    item.published = entry.published.or(entry.updated).map(|dt| dt.to_rfc2822());
    item
}
