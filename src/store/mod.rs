pub mod csv_store;

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::app::Result;
use crate::domain::Article;

pub use csv_store::CsvStore;

/// Persistence for one run's articles.
pub trait ArticleStore {
    /// Write the articles collected on `run_date`, returning where they went.
    fn save(&self, articles: &[Article], run_date: NaiveDate) -> Result<PathBuf>;
}
