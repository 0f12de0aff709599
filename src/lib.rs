//! # Newsharvest
//!
//! Collects news headlines for a list of search queries from two providers,
//! an RSS search feed and a paginated HTML result page, and merges them into
//! one deduplicated article list.
//!
//! ## Architecture
//!
//! ```text
//! RequestGate → PageSource ─┐
//!                           ├→ Deduplicator → CsvStore
//! RequestGate → FeedSource ─┘
//! ```
//!
//! - [`fetcher`]: HTTP client, retry gate with exponential backoff, politeness delays
//! - [`collector`]: Per-provider collection loops
//! - [`parser`]: Result-page parser with current and legacy layouts
//! - [`normalizer`]: Feed parsing and record normalization
//! - [`dedup`]: Title-based deduplication
//! - [`store`]: Daily CSV output
//!
//! ## Quick Start
//!
//! ```bash
//! # Write ~/.config/newsharvest/config.toml
//! newsharvest init-config
//!
//! # Collect the configured queries into data/news_YYYYMMDD.csv
//! newsharvest collect
//!
//! # Collect two ad-hoc queries and print JSON lines
//! newsharvest collect -q 수면 -q 영양제 --json
//!
//! # Check which layout matches a saved result page
//! newsharvest parse saved.html
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the fetcher, both
/// collectors, the harvester and the output store.
pub mod app;

/// Command-line interface using clap.
///
/// - `collect [-q QUERY]... [--out-dir DIR] [--json]`
/// - `parse <FILE> [--base URL]`
/// - `init-config`
pub mod cli;

/// Feed and result-page collectors.
pub mod collector;

/// Configuration loaded from `~/.config/newsharvest/config.toml`.
pub mod config;

/// Title-keyed deduplication.
pub mod dedup;

/// Core domain models.
///
/// - [`Article`](domain::Article): A normalized output record
/// - [`ParsedItem`](domain::ParsedItem): Raw fields extracted by a parser
pub mod domain;

/// HTTP fetching, retries and delays.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for a single GET
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation
/// - [`RequestGate`](fetcher::RequestGate): Retry with exponential backoff
/// - [`PolitenessDelay`](fetcher::PolitenessDelay): Random pauses between requests
pub mod fetcher;

/// Orchestration of both collectors.
pub mod harvest;

/// Feed parsing and record normalization.
pub mod normalizer;

/// Result-page parsing.
///
/// Tries the current card layout first and falls back to the legacy list
/// layout only when no card container is present.
pub mod parser;

/// Output persistence.
pub mod store;
