use std::{env, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use walletwala_tui::{app, config, log};

#[derive(Parser)]
#[command(name = "walletwala")]
#[command(about = "WalletWala - chat with your money, right in your terminal", long_about = None)]
struct Cli {
    /// Screen to open: "landing" for the full page, "meter" for just the
    /// mood meter.
    #[arg(long, default_value = "landing")]
    view: String,

    /// Optional TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the log file (defaults to the system temp dir).
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if cli.log_dir.is_some() {
        config.log_dir = cli.log_dir;
    }

    let log_dir = config.log_dir.clone().unwrap_or_else(env::temp_dir);
    log::setup_logger(&log_dir)?;
    info!(view = %cli.view, "starting walletwala");

    app::run(&config, &cli.view).await
}
