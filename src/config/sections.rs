use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request signature and retry policy shared by both providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Browser User-Agent sent with every request
    pub user_agent: String,

    /// Accept-Language header value
    pub accept_language: String,

    /// Per-request socket timeout in seconds (default: 10)
    pub timeout_secs: u64,

    /// Attempts per fetch before giving up (default: 3)
    pub max_retries: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36"
                .to_string(),
            accept_language: "ko-KR,ko;q=0.9,en-US;q=0.8".to_string(),
            timeout_secs: 10,
            max_retries: 3,
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Longest politeness delay accepted, in seconds.
pub const MAX_DELAY_SECS: f64 = 3600.0;

/// Randomized politeness delay between network calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    pub delay_min_secs: f64,
    pub delay_max_secs: f64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            delay_min_secs: 1.0,
            delay_max_secs: 3.0,
        }
    }
}

impl ThrottleConfig {
    /// Delay bounds as durations, `(min, max)`.
    pub fn range(&self) -> (Duration, Duration) {
        (
            clamp_secs(self.delay_min_secs),
            clamp_secs(self.delay_max_secs),
        )
    }
}

fn clamp_secs(secs: f64) -> Duration {
    // NaN lands on 0.0 through max()
    Duration::from_secs_f64(secs.max(0.0).min(MAX_DELAY_SECS))
}

/// Per-query crawl budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    pub max_pages_per_query: usize,
    pub max_articles_per_query: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_pages_per_query: 3,
            max_articles_per_query: 30,
        }
    }
}

/// Provider URL templates. `{query}` receives the percent-encoded query,
/// `{start}` the 1-based result offset of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub feed_url: String,
    pub page_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            feed_url: "https://news.google.com/rss/search?q={query}&hl=ko&gl=KR&ceid=KR:ko"
                .to_string(),
            page_url: "https://search.naver.com/search.naver?where=news&query={query}&start={start}"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving `news_YYYYMMDD.csv`
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "data".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_http_values() {
        let http = HttpConfig::default();
        assert_eq!(http.timeout_secs, 10);
        assert_eq!(http.max_retries, 3);
        assert!(http.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(http.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_throttle_range() {
        let throttle = ThrottleConfig {
            delay_min_secs: 0.5,
            delay_max_secs: 2.0,
        };
        assert_eq!(
            throttle.range(),
            (Duration::from_millis(500), Duration::from_secs(2))
        );
    }

    #[test]
    fn test_range_never_exceeds_bound() {
        let throttle = ThrottleConfig {
            delay_min_secs: f64::NAN,
            delay_max_secs: 1e20,
        };
        assert_eq!(
            throttle.range(),
            (Duration::ZERO, Duration::from_secs_f64(MAX_DELAY_SECS))
        );
    }

    #[test]
    fn test_default_templates_have_placeholders() {
        let providers = ProviderConfig::default();
        assert!(providers.feed_url.contains("{query}"));
        assert!(providers.page_url.contains("{query}"));
        assert!(providers.page_url.contains("{start}"));
    }
}
