use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::app::Result;
use crate::domain::Article;
use crate::store::ArticleStore;

/// Byte order mark so spreadsheet tools detect UTF-8.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes `news_YYYYMMDD.csv` under a data directory.
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, run_date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("news_{}.csv", run_date.format("%Y%m%d")))
    }
}

impl ArticleStore for CsvStore {
    fn save(&self, articles: &[Article], run_date: NaiveDate) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(run_date);

        let mut file = File::create(&path)?;
        file.write_all(UTF8_BOM)?;

        let mut writer = csv::WriterBuilder::new().from_writer(file);
        if articles.is_empty() {
            writer.write_record([
                "date",
                "source",
                "query",
                "title",
                "description",
                "link",
                "published",
            ])?;
        }
        for article in articles {
            writer.serialize(article)?;
        }
        writer.flush()?;

        tracing::info!("Saved {} articles to {}", articles.len(), path.display());
        Ok(path)
    }
}
