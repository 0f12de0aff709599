//! Search-result page parsing across markup generations.
//!
//! The page provider has shipped more than one result layout and either may be
//! served. [`PageParser`] probes its [`Layout`]s in priority order; the first
//! layout whose containers are present in the document decides the page on
//! its own, even if it then yields no items. Layouts are never merged.

mod current;
mod legacy;

pub use current::CurrentLayout;
pub use legacy::LegacyLayout;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::app::{HarvestError, Result};
use crate::domain::ParsedItem;
use crate::normalizer::collapse_whitespace;

/// One structural version of the result markup.
pub trait Layout: Send + Sync {
    fn name(&self) -> &'static str;

    /// Extract items, or `None` when this layout's containers are absent.
    fn attempt(&self, document: &Html, base: &Url) -> Option<Vec<ParsedItem>>;
}

/// Ordered list of layouts, highest priority first.
pub struct PageParser {
    layouts: Vec<Box<dyn Layout>>,
}

impl PageParser {
    /// Current layout first, legacy layout as fallback.
    pub fn new() -> Result<Self> {
        Ok(Self::with_layouts(vec![
            Box::new(CurrentLayout::new()?),
            Box::new(LegacyLayout::new()?),
        ]))
    }

    pub fn with_layouts(layouts: Vec<Box<dyn Layout>>) -> Self {
        Self { layouts }
    }

    pub fn layout_names(&self) -> Vec<&'static str> {
        self.layouts.iter().map(|l| l.name()).collect()
    }

    /// Parse a result page. An empty vector means no more results.
    pub fn parse(&self, html: &str, base: &Url) -> Vec<ParsedItem> {
        let document = Html::parse_document(html);

        for layout in &self.layouts {
            if let Some(items) = layout.attempt(&document, base) {
                tracing::debug!("Parsed {} items with {} layout", items.len(), layout.name());
                return items;
            }
        }

        tracing::debug!("No known layout matched {}", base);
        Vec::new()
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| HarvestError::Selector(format!("{css}: {e:?}")))
}

/// Visible text of an element with whitespace runs collapsed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Resolve `href` against the page URL; unresolvable values are kept as-is.
/// A missing or blank href stays empty rather than pointing at the page.
pub(crate) fn resolve_link(base: &Url, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}
