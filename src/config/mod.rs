//! Configuration management for newsharvest.
//!
//! Configuration is read from `~/.config/newsharvest/config.toml` at startup,
//! or from the path given with `--config`. If the default file doesn't exist,
//! a default configuration with comments is created.

pub mod sections;

pub use sections::{
    CrawlConfig, HttpConfig, OutputConfig, ProviderConfig, ThrottleConfig, MAX_DELAY_SECS,
};

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub queries: Vec<String>,
    pub http: HttpConfig,
    pub throttle: ThrottleConfig,
    pub crawl: CrawlConfig,
    pub providers: ProviderConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            queries: default_queries(),
            http: HttpConfig::default(),
            throttle: ThrottleConfig::default(),
            crawl: CrawlConfig::default(),
            providers: ProviderConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_queries() -> Vec<String> {
    ["건강", "건강검진", "다이어트", "수면", "영양제"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// path is used and created with commented defaults when missing.
    /// Missing fields in the config file will use default values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default_path = Self::default_config_path()?;
                if !default_path.exists() {
                    Self::create_default_config(&default_path)?;
                    return Ok(Self::default());
                }
                default_path
            }
        };

        Self::load_from(&config_path)
    }

    /// Read, parse and validate a config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Write the commented default file at the default path unless one exists.
    pub fn init_default() -> Result<PathBuf, ConfigError> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }
        Ok(config_path)
    }

    /// Get the default config file path: `~/.config/newsharvest/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("newsharvest").join("config.toml"))
    }

    /// Check numeric bounds and URL templates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.max_retries == 0 {
            return Err(ConfigError::Invalid(
                "http.max_retries must be greater than 0".into(),
            ));
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "http.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.crawl.max_pages_per_query == 0 {
            return Err(ConfigError::Invalid(
                "crawl.max_pages_per_query must be greater than 0".into(),
            ));
        }
        if self.crawl.max_articles_per_query == 0 {
            return Err(ConfigError::Invalid(
                "crawl.max_articles_per_query must be greater than 0".into(),
            ));
        }
        let ThrottleConfig {
            delay_min_secs,
            delay_max_secs,
        } = self.throttle;
        if !(delay_min_secs >= 0.0 && delay_min_secs <= delay_max_secs) {
            return Err(ConfigError::Invalid(
                "throttle delay range must satisfy 0 <= delay_min_secs <= delay_max_secs".into(),
            ));
        }
        if delay_max_secs > MAX_DELAY_SECS {
            return Err(ConfigError::Invalid(format!(
                "throttle.delay_max_secs must not exceed {MAX_DELAY_SECS}"
            )));
        }
        if !self.providers.feed_url.contains("{query}") {
            return Err(ConfigError::Invalid(
                "providers.feed_url must contain {query}".into(),
            ));
        }
        if !self.providers.page_url.contains("{query}")
            || !self.providers.page_url.contains("{start}")
        {
            return Err(ConfigError::Invalid(
                "providers.page_url must contain {query} and {start}".into(),
            ));
        }
        Ok(())
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# newsharvest configuration
#
# Every key is optional; omitted keys fall back to the values shown here.

# Search terms collected from both providers, in order.
queries = ["건강", "건강검진", "다이어트", "수면", "영양제"]

[http]
# Browser signature sent with every request
user_agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36"
accept_language = "ko-KR,ko;q=0.9,en-US;q=0.8"

# Per-request timeout in seconds
timeout_secs = 10

# Attempts per request; waits 2, 4, 8... seconds between attempts
max_retries = 3

[throttle]
# Random wait between network calls, in seconds
delay_min_secs = 1.0
delay_max_secs = 3.0

[crawl]
max_pages_per_query = 3
max_articles_per_query = 30

[providers]
# {query} is replaced with the percent-encoded query,
# {start} with the result offset of the page (1, 11, 21, ...)
feed_url = "https://news.google.com/rss/search?q={query}&hl=ko&gl=KR&ceid=KR:ko"
page_url = "https://search.naver.com/search.naver?where=news&query={query}&start={start}"

[output]
dir = "data"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
