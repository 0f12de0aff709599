use std::path::{Path, PathBuf};

use chrono::Local;
use url::Url;

use crate::app::{AppContext, HarvestError, Result};
use crate::config::Config;
use crate::domain::ParsedItem;
use crate::parser::PageParser;
use crate::store::ArticleStore;

/// Collect, deduplicate and persist articles for `queries` (or the configured
/// queries when none are given).
pub async fn collect(ctx: &AppContext, queries: &[String], json: bool) -> Result<()> {
    let queries = if queries.is_empty() {
        ctx.config.queries.as_slice()
    } else {
        queries
    };

    if queries.is_empty() {
        return Err(HarvestError::Config("no queries to collect".into()));
    }

    let articles = ctx.harvester.collect_all(queries).await?;
    // Every article carries the run date stamped at collection time
    let run_date = articles
        .first()
        .map(|a| a.date)
        .unwrap_or_else(|| Local::now().date_naive());

    if json {
        for article in &articles {
            println!("{}", serde_json::to_string(article)?);
        }
    } else {
        let path = ctx.store.save(&articles, run_date)?;
        println!("Saved {} articles to {}", articles.len(), path.display());
    }

    Ok(())
}

/// Parse a saved result page and print what each layout rule extracted.
pub fn parse_saved_page(path: &Path, base: &str) -> Result<()> {
    let items = parse_file(path, base)?;

    if items.is_empty() {
        println!("No items found");
        return Ok(());
    }

    for item in &items {
        println!(
            "{}\n  {}\n  {}\n  {}",
            item.title,
            item.link,
            item.published.as_deref().unwrap_or("-"),
            item.description
        );
    }
    println!("{} items", items.len());

    Ok(())
}

fn parse_file(path: &Path, base: &str) -> Result<Vec<ParsedItem>> {
    let html = std::fs::read_to_string(path)?;
    let base = Url::parse(base)?;
    Ok(PageParser::new()?.parse(&html, &base))
}

/// Create the default config file when missing and report its path.
pub fn init_config() -> Result<PathBuf> {
    let path = Config::init_default().map_err(|e| HarvestError::Config(e.to_string()))?;
    println!("Config file: {}", path.display());
    Ok(path)
}
