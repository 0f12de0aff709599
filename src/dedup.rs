//! Cross-source duplicate suppression keyed by normalised title.

use std::collections::HashSet;

use crate::domain::Article;

/// Keep the first article for each [`Article::dedup_key`], in input order.
///
/// Callers pass page results before feed results, so the page copy of a
/// shared headline is the one kept. Articles with an empty key are dropped.
pub fn deduplicate(articles: Vec<Article>) -> Vec<Article> {
    let mut seen: HashSet<String> = HashSet::new();

    articles
        .into_iter()
        .filter(|article| {
            let key = article.dedup_key();
            !key.is_empty() && seen.insert(key)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Source;
    use chrono::NaiveDate;

    fn article(title: &str, source: Source, link: &str) -> Article {
        Article {
            date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            source,
            query: "flu".into(),
            title: title.into(),
            description: String::new(),
            link: link.into(),
            published: "2026-10-17".into(),
        }
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let articles = vec![
            article(" Flu News ", Source::Page, "https://page.example.com/1"),
            article("flu news", Source::Feed, "https://feed.example.com/1"),
        ];
        let deduped = deduplicate(articles);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].source, Source::Page);
        assert_eq!(deduped[0].link, "https://page.example.com/1");
    }

    #[test]
    fn test_preserves_first_occurrence_order() {
        let articles = vec![
            article("A headline", Source::Page, "1"),
            article("B headline", Source::Page, "2"),
            article("a headline", Source::Feed, "3"),
            article("C headline", Source::Feed, "4"),
            article("B HEADLINE", Source::Feed, "5"),
        ];
        let links: Vec<String> = deduplicate(articles).into_iter().map(|a| a.link).collect();
        assert_eq!(links, vec!["1", "2", "4"]);
    }

    #[test]
    fn test_drops_empty_keys() {
        let articles = vec![
            article("   ", Source::Page, "1"),
            article("", Source::Feed, "2"),
            article("Real", Source::Feed, "3"),
        ];
        let deduped = deduplicate(articles);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].title, "Real");
    }

    #[test]
    fn test_empty_input() {
        assert!(deduplicate(Vec::new()).is_empty());
    }
}
