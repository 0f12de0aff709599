use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newsharvest::app::AppContext;
use newsharvest::cli::{commands, Cli, Commands};
use newsharvest::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `collect --json` output stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Collect {
            queries,
            out_dir,
            json,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let ctx = AppContext::new(config, out_dir)?;
            commands::collect(&ctx, &queries, json).await?;
        }
        Commands::Parse { path, base } => {
            commands::parse_saved_page(&path, &base)?;
        }
        Commands::InitConfig => {
            commands::init_config()?;
        }
    }

    Ok(())
}
