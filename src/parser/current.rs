use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::app::Result;
use crate::domain::ParsedItem;
use crate::parser::{element_text, resolve_link, selector, Layout};

/// Generated class of a single result card.
const CONTAINER: &str = "div.YWTMk0ahJUsxq4uCx9gX";
const LINK: &str = "a[href]";
/// Profile sub-labels, one of which carries the relative publish time.
const TIME_LABEL: &str = "span.sds-comps-profile-info-subtext";

/// An href containing any of these points at an article.
const ARTICLE_MARKERS: &[&str] = &["articleView", "n.news.naver.com"];

const RELATIVE_TIME_MARKERS: &[&str] = &[
    "분 전",
    "시간 전",
    "일 전",
    "어제",
    "방금",
    "minute ago",
    "minutes ago",
    "hour ago",
    "hours ago",
    "day ago",
    "days ago",
    "yesterday",
    "just now",
];

const MIN_TITLE_CHARS: usize = 5;

/// Link texts that belong to the card chrome, not to an article.
const UI_TITLES: &[&str] = &["네이버뉴스", "Keep에 저장", "뉴스", ""];

/// Card-based result markup served since the component redesign.
pub struct CurrentLayout {
    container: Selector,
    link: Selector,
    time_label: Selector,
}

impl CurrentLayout {
    pub fn new() -> Result<Self> {
        Ok(Self {
            container: selector(CONTAINER)?,
            link: selector(LINK)?,
            time_label: selector(TIME_LABEL)?,
        })
    }

    fn parse_card(&self, card: ElementRef<'_>, base: &Url) -> Option<ParsedItem> {
        let candidates: Vec<(ElementRef<'_>, &str)> = card
            .select(&self.link)
            .filter_map(|a| a.value().attr("href").map(|href| (a, href)))
            .filter(|(_, href)| is_article_href(href))
            .collect();

        // Positional: first article link is the headline, second the summary.
        let (title_el, href) = candidates.first()?;
        let title = element_text(*title_el);
        let description = candidates
            .get(1)
            .map(|(el, _)| element_text(*el))
            .unwrap_or_default();

        if !is_article_title(&title) {
            return None;
        }

        let published = card
            .select(&self.time_label)
            .map(element_text)
            .find(|text| is_relative_time(text));

        let mut item =
            ParsedItem::new(title, resolve_link(base, href)).with_description(description);
        item.published = published;
        Some(item)
    }
}

impl Layout for CurrentLayout {
    fn name(&self) -> &'static str {
        "current"
    }

    fn attempt(&self, document: &Html, base: &Url) -> Option<Vec<ParsedItem>> {
        let cards: Vec<ElementRef<'_>> = document.select(&self.container).collect();
        if cards.is_empty() {
            return None;
        }

        Some(
            cards
                .into_iter()
                .filter_map(|card| self.parse_card(card, base))
                .collect(),
        )
    }
}

fn is_article_href(href: &str) -> bool {
    ARTICLE_MARKERS.iter().any(|m| href.contains(m))
}

fn is_relative_time(text: &str) -> bool {
    let text = text.to_lowercase();
    RELATIVE_TIME_MARKERS.iter().any(|m| text.contains(m))
}

fn is_article_title(title: &str) -> bool {
    title.chars().count() >= MIN_TITLE_CHARS && !UI_TITLES.contains(&title)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS_HTML: &str = r#"<html><body>
<div class="YWTMk0ahJUsxq4uCx9gX">
  <a href="https://media.example.com/home">Publisher Home</a>
  <span class="sds-comps-profile-info-subtext">Health Daily</span>
  <span class="sds-comps-profile-info-subtext">3 hours ago</span>
  <a href="https://www.healthdaily.com/news/articleView.html?idxno=1">
     Flu season   hits <b>hard</b>
  </a>
  <a href="https://www.healthdaily.com/news/articleView.html?idxno=1">Hospitals report a surge in cases.</a>
</div>
<div class="YWTMk0ahJUsxq4uCx9gX">
  <a href="https://n.news.naver.com/mnews/article/001/0002">수면 부족이 면역력에 미치는 영향</a>
  <span class="sds-comps-profile-info-subtext">어제</span>
</div>
<div class="YWTMk0ahJUsxq4uCx9gX">
  <a href="https://n.news.naver.com/mnews/article/001/0003">Keep에 저장</a>
</div>
<div class="YWTMk0ahJUsxq4uCx9gX">
  <a href="https://n.news.naver.com/mnews/article/001/0004">Tiny</a>
</div>
<div class="YWTMk0ahJUsxq4uCx9gX">
  <a href="https://media.example.com/other">No article links here</a>
</div>
<div class="YWTMk0ahJUsxq4uCx9gX">
  <a href="/news/articleView.html?idxno=9">Relative link article title</a>
</div>
</body></html>"#;

    fn parse(html: &str) -> Option<Vec<ParsedItem>> {
        let layout = CurrentLayout::new().unwrap();
        let document = Html::parse_document(html);
        let base = Url::parse("https://search.example.com/search?query=flu").unwrap();
        layout.attempt(&document, &base)
    }

    #[test]
    fn test_extracts_cards() {
        let items = parse(CARDS_HTML).unwrap();
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].title, "Flu season hits hard");
        assert_eq!(
            items[0].link,
            "https://www.healthdaily.com/news/articleView.html?idxno=1"
        );
        assert_eq!(items[0].description, "Hospitals report a surge in cases.");
        assert_eq!(items[0].published.as_deref(), Some("3 hours ago"));

        assert_eq!(items[1].title, "수면 부족이 면역력에 미치는 영향");
        assert_eq!(items[1].description, "");
        assert_eq!(items[1].published.as_deref(), Some("어제"));
    }

    #[test]
    fn test_relative_href_resolved_against_page() {
        let items = parse(CARDS_HTML).unwrap();
        assert_eq!(
            items[2].link,
            "https://search.example.com/news/articleView.html?idxno=9"
        );
        assert!(items[2].published.is_none());
    }

    #[test]
    fn test_no_containers_is_none() {
        assert!(parse("<html><body><ul class=\"list_news\"></ul></body></html>").is_none());
    }

    #[test]
    fn test_quality_filter() {
        assert!(!is_article_title("Tiny"));
        assert!(!is_article_title("네이버뉴스"));
        assert!(!is_article_title("Keep에 저장"));
        assert!(is_article_title("다섯글자임"));
        assert!(is_article_title("Flu season hits hard"));
    }

    #[test]
    fn test_relative_time_patterns() {
        assert!(is_relative_time("5분 전"));
        assert!(is_relative_time("2시간 전"));
        assert!(is_relative_time("방금"));
        assert!(is_relative_time("12 minutes ago"));
        assert!(is_relative_time("Yesterday"));
        assert!(is_relative_time("just now"));
        assert!(!is_relative_time("Health Daily"));
        assert!(!is_relative_time("2026.10.17."));
    }

    #[test]
    fn test_article_href_markers() {
        assert!(is_article_href("https://x.com/news/articleView.html?idxno=3"));
        assert!(is_article_href("https://n.news.naver.com/article/1"));
        assert!(!is_article_href("https://blog.example.com/post/1"));
    }
}
