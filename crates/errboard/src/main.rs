//! errboard - ranked error frequency panel for the terminal
//!
//! Fetches grouped command errors from the aggregation service once and shows
//! them by frequency, with a detail popup per group.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use errboard::{commands, errors, logging, tui};
use errboard_common::{HttpErrorGroupSource, PanelConfig};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::info;

// Version is embedded at build time
const VERSION: &str = env!("ERRBOARD_VERSION");

#[derive(Parser)]
#[command(name = "errboard")]
#[command(about = "Error frequency panel - most frequent command errors first", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Aggregation service base URL (overrides ERRBOARD_API_URL and the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Config file (default: $XDG_CONFIG_HOME/errboard/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive panel (default)
    Panel,

    /// Print the ranked error groups and exit
    List {
        /// Print ranked groups as JSON in the service's wire format
        #[arg(long)]
        json: bool,
    },
}

fn load_config(cli: &Cli) -> Result<PanelConfig> {
    let mut config = PanelConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(url) = &cli.api_url {
        config.api.url = url.clone();
        config.validate().context("Invalid --api-url")?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Commands::Panel) {
        Commands::Panel => {
            if let Some(path) = logging::init_file_logging(&config.log.level) {
                eprintln!("Logging to {}", path.display());
            }
            info!("errboard v{} starting", VERSION);
            tui::run(config).await
        }
        Commands::List { json } => {
            logging::init_stderr_logging(&config.log.level);
            let source = HttpErrorGroupSource::new(&config)?;

            let token = CancellationToken::new();
            let interrupt = token.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    interrupt.cancel();
                }
            });

            let mut stdout = std::io::stdout();
            let code = commands::list(&source, json, &token, &mut stdout).await;
            if code != errors::EXIT_SUCCESS {
                std::process::exit(code);
            }
            Ok(())
        }
    }
}
