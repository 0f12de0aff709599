use chrono::NaiveDate;

use crate::domain::Source;

/// Provider-specific fields extracted from one response, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedItem {
    pub title: String,
    pub description: String,
    pub link: String,
    /// Provider date or relative-time phrase, if the markup carried one.
    pub published: Option<String>,
}

impl ParsedItem {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = Some(published.into());
        self
    }
}

/// Where a [`ParsedItem`] came from: the originating query, provider and run date.
#[derive(Debug, Clone, Copy)]
pub struct RecordContext<'a> {
    pub query: &'a str,
    pub source: Source,
    pub run_date: NaiveDate,
}

impl<'a> RecordContext<'a> {
    pub fn new(query: &'a str, source: Source, run_date: NaiveDate) -> Self {
        Self {
            query,
            source,
            run_date,
        }
    }

    /// Run date as it appears in the `published` fallback.
    pub fn run_date_string(&self) -> String {
        self.run_date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let item = ParsedItem::new("Title", "https://example.com")
            .with_description("Desc")
            .with_published("3 hours ago");
        assert_eq!(item.title, "Title");
        assert_eq!(item.link, "https://example.com");
        assert_eq!(item.description, "Desc");
        assert_eq!(item.published.as_deref(), Some("3 hours ago"));
    }

    #[test]
    fn test_new_item_has_no_published() {
        let item = ParsedItem::new("Title", "https://example.com");
        assert!(item.published.is_none());
        assert!(item.description.is_empty());
    }

    #[test]
    fn test_run_date_string() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let ctx = RecordContext::new("flu", Source::Feed, date);
        assert_eq!(ctx.run_date_string(), "2026-01-05");
    }
}
