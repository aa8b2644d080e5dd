use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use ivi::commands;
use ivi::config;
use ivi::settings::{SettingsClient, SettingsProvider};
use ivi::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "ivi")]
#[command(
    about = "In-vehicle infotainment dashboard",
    long_about = "In-vehicle infotainment dashboard\n\nIf no command is specified, the program starts the interactive kiosk."
)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Base URL of the settings service (overrides the config file)
    #[arg(long, global = true)]
    settings_url: Option<String>,

    /// Use an in-memory settings service instead of the network
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display current configuration
    Config,
    /// Display all settings stored by the settings service
    Settings,
    /// Display a single setting
    Get {
        /// theme, fullscreen or notifications
        key: String,
    },
    /// Change a single setting
    Set {
        /// theme, fullscreen or notifications
        key: String,
        /// New value; fullscreen and notifications take true/false
        value: String,
    },
    /// List the available themes
    Themes,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

fn create_provider(cli: &Cli, config: &config::Config) -> anyhow::Result<Arc<dyn SettingsProvider>> {
    #[cfg(feature = "development")]
    if cli.mock {
        tracing::info!("Using in-memory settings service");
        return Ok(Arc::new(ivi::dev::MockSettingsService::new()));
    }
    #[cfg(not(feature = "development"))]
    let _ = cli;

    let client = SettingsClient::from_config(config)?;
    Ok(Arc::new(client))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(provider: &dyn SettingsProvider, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Settings => commands::settings::show(provider).await,
        Commands::Get { key } => commands::settings::get(provider, &key).await,
        Commands::Set { key, value } => commands::settings::set(provider, &key, &value).await,
        Commands::Themes => commands::settings::themes(provider).await,
    }
}

async fn run(cli: Cli, config: config::Config) -> anyhow::Result<()> {
    let provider = create_provider(&cli, &config)?;

    match cli.command {
        None => Ok(tui::run(provider, config).await?),
        Some(command) => execute_command(provider.as_ref(), command).await,
    }
}

#[tokio::main]
async fn main() {
    let (mut config, config_error) = match config::read() {
        Ok(config) => (config, None),
        Err(e) => (config::Config::default(), Some(e)),
    };
    let cli = Cli::parse();

    if let Some(url) = &cli.settings_url {
        config.settings_url = url.clone();
    }

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // Reported only now so the warning reaches the log file
    if let Some(e) = config_error {
        eprintln!("Ignoring malformed config file: {}", e);
        tracing::warn!("CONFIG: Ignoring malformed config file: {}", e);
    }

    // Handle Config command separately (doesn't need the settings service)
    if let Some(Commands::Config) = cli.command {
        commands::config::run(&config);
        return;
    }

    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
