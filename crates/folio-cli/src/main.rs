use std::fs::{self, OpenOptions};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A terminal portfolio with horizontal section navigation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Section to open first, by id or zero-based index
        #[arg(short, long)]
        start: Option<String>,
    },
    /// List configured sections
    Sections,
    /// Write the default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
    /// Print the config file location
    ConfigPath,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run { start: None }) {
        Commands::Run { start } => {
            let config = Arc::new(load_config()?);
            init_file_logging(&config)?;
            commands::run::run(config, start).await
        }
        Commands::Sections => {
            let config = load_config()?;
            init_stderr_logging(&config.general.log_level);
            commands::sections::run(&config)
        }
        Commands::Init { force } => {
            // The existing config may be the broken one being replaced
            init_stderr_logging("info");
            commands::init::run(&AppConfig::config_path(), force)
        }
        Commands::ConfigPath => {
            println!("{}", AppConfig::config_path().display());
            Ok(())
        }
    }
}

fn load_config() -> Result<AppConfig> {
    let path = AppConfig::config_path();
    AppConfig::load_from(&path).with_context(|| format!("Failed to load {}", path.display()))
}

fn env_filter(default_level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
    )
}

fn init_stderr_logging(level: &str) {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// The TUI owns the terminal, so logs go to `<data_dir>/folio.log`
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(&config.general.log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}
