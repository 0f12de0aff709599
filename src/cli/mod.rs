pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Base URL assumed for relative links in a saved result page.
pub const DEFAULT_PAGE_BASE: &str = "https://search.naver.com/search.naver";

#[derive(Parser)]
#[command(name = "newsharvest")]
#[command(about = "Collect and deduplicate news search results", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/newsharvest/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect articles from both providers and save them
    Collect {
        /// Query to collect; repeat for several (default: queries from config)
        #[arg(short = 'q', long = "query")]
        queries: Vec<String>,

        /// Directory for the CSV output (default: output.dir from config)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Print articles as JSON lines instead of writing CSV
        #[arg(long)]
        json: bool,
    },
    /// Run the result-page parser over a saved HTML file
    Parse {
        /// Path to the saved page
        path: PathBuf,

        /// URL the page was fetched from, for resolving relative links
        #[arg(long, default_value = DEFAULT_PAGE_BASE)]
        base: String,
    },
    /// Write the default config file if it does not exist
    InitConfig,
}
