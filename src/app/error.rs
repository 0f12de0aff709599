use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Network failure: {url} failed after {attempts} attempts")]
    NetworkFailure { url: String, attempts: u32 },

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("No articles collected from any source")]
    NoArticlesCollected,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HarvestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_failure_message() {
        let err = HarvestError::NetworkFailure {
            url: "https://example.com/search".into(),
            attempts: 3,
        };
        assert_eq!(
            err.to_string(),
            "Network failure: https://example.com/search failed after 3 attempts"
        );
    }

    #[test]
    fn test_feed_parse_message() {
        let err = HarvestError::FeedParse("unexpected EOF".into());
        assert_eq!(err.to_string(), "Feed parsing error: unexpected EOF");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HarvestError>();
    }
}
