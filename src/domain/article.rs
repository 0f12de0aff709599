use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Provider an [`Article`] was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Syndication feed provider, one request per query.
    Feed,
    /// Paginated HTML search-result provider.
    Page,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Feed => "feed",
            Source::Page => "page",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified search-result record.
///
/// Field order matches the persisted column order:
/// `date, source, query, title, description, link, published`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub date: NaiveDate,
    pub source: Source,
    pub query: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub published: String,
}

impl Article {
    /// Key used to suppress duplicates across sources.
    pub fn dedup_key(&self) -> String {
        self.title.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            source: Source::Page,
            query: "flu".into(),
            title: title.into(),
            description: String::new(),
            link: "https://example.com/a".into(),
            published: "2026-10-17".into(),
        }
    }

    #[test]
    fn test_dedup_key_trims_and_lowercases() {
        assert_eq!(article(" Flu News ").dedup_key(), "flu news");
        assert_eq!(article("flu news").dedup_key(), "flu news");
    }

    #[test]
    fn test_source_display() {
        assert_eq!(Source::Feed.to_string(), "feed");
        assert_eq!(Source::Page.to_string(), "page");
    }

    #[test]
    fn test_source_serializes_lowercase() {
        let json = serde_json::to_string(&Source::Page).unwrap();
        assert_eq!(json, "\"page\"");
    }

    #[test]
    fn test_date_serializes_as_calendar_date() {
        let json = serde_json::to_value(article("Flu News")).unwrap();
        assert_eq!(json["date"], "2026-10-17");
        assert_eq!(json["source"], "page");
    }
}
