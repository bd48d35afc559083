use anyhow::Context;
use clap::Parser;

use cartview::config::Config;
use cartview::logging::init_tracing;
use cartview::ui::runtime;

/// Terminal mockup of a food-delivery checkout screen.
#[derive(Debug, Parser)]
#[command(name = "cartview", version)]
struct Cli {
    /// Path to the config file (default: platform config dir).
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Override the share-link origin (scheme + host).
    #[arg(long)]
    origin: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    if let Some(origin) = cli.origin {
        config.share.origin = origin;
    }

    runtime::run(config).context("terminal UI failed")?;
    Ok(())
}
