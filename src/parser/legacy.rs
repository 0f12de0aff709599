use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::app::Result;
use crate::domain::ParsedItem;
use crate::parser::{element_text, resolve_link, selector, Layout};

/// List items, tried in order; the first selector with any match wins.
const ITEM_SELECTORS: &[&str] = &["ul.list_news > li.bx", "div.news_wrap"];
const TITLE: &str = "a.news_tit";
const DESCRIPTION_SELECTORS: &[&str] = &[
    "a.api_txt_lines.dsc_txt_wrap",
    ".dsc_txt_wrap",
    ".dsc_txt",
];
const DATE_SELECTORS: &[&str] = &["span.info", ".info_group span.info"];

/// List-based result markup that predates the card redesign.
pub struct LegacyLayout {
    items: Vec<Selector>,
    title: Selector,
    descriptions: Vec<Selector>,
    dates: Vec<Selector>,
}

impl LegacyLayout {
    pub fn new() -> Result<Self> {
        Ok(Self {
            items: compile(ITEM_SELECTORS)?,
            title: selector(TITLE)?,
            descriptions: compile(DESCRIPTION_SELECTORS)?,
            dates: compile(DATE_SELECTORS)?,
        })
    }

    fn parse_item(&self, item: ElementRef<'_>, base: &Url) -> Option<ParsedItem> {
        let title_el = item.select(&self.title).next()?;
        let href = title_el.value().attr("href").unwrap_or_default();

        let description = first_match(item, &self.descriptions)
            .map(element_text)
            .unwrap_or_default();

        let mut parsed = ParsedItem::new(element_text(title_el), resolve_link(base, href))
            .with_description(description);
        parsed.published = first_match(item, &self.dates).map(element_text);
        Some(parsed)
    }
}

impl Layout for LegacyLayout {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn attempt(&self, document: &Html, base: &Url) -> Option<Vec<ParsedItem>> {
        let items = self
            .items
            .iter()
            .map(|sel| document.select(sel).collect::<Vec<_>>())
            .find(|found| !found.is_empty())?;

        Some(
            items
                .into_iter()
                .filter_map(|item| self.parse_item(item, base))
                .collect(),
        )
    }
}

fn compile(selectors: &[&str]) -> Result<Vec<Selector>> {
    selectors.iter().map(|css| selector(css)).collect()
}

/// First element matched by the highest-priority selector that matches at all.
fn first_match<'a>(scope: ElementRef<'a>, selectors: &[Selector]) -> Option<ElementRef<'a>> {
    selectors.iter().find_map(|sel| scope.select(sel).next())
}
