// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Log, info, warn};

use passkeeper::app_config::{Config, LogLevel};
use passkeeper::database::DeploymentMode;
use passkeeper::logging::{self, AppLogger};
use passkeeper::Repository;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for DeploymentMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliDeploymentMode {
    Packaged,
    Source,
}

impl From<CliDeploymentMode> for DeploymentMode {
    fn from(cli_mode: CliDeploymentMode) -> Self {
        match cli_mode {
            CliDeploymentMode::Packaged => DeploymentMode::Packaged,
            CliDeploymentMode::Source => DeploymentMode::Source,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the database and its tables if they do not exist
    Init,

    /// Print the resolved database file path
    Path,

    /// Generate shell completions for passkeeper
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// passkeeper - local password store
///
/// Prepares the SQLite database that holds users, sites and their credentials.
#[derive(Parser, Debug)]
#[command(name = "passkeeper")]
#[command(version)]
#[command(about = "Local password store bootstrap tool")]
#[command(long_about = "passkeeper manages the SQLite database behind the local password store.

EXAMPLES:
    passkeeper init                        # Create data/passwords.db and its tables
    passkeeper --mode source path          # Show where the database lives
    passkeeper --base-dir /srv/pk init     # Use an explicit base directory
    passkeeper completions bash > pk.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Override the deployment mode
    #[arg(short, long, value_enum)]
    mode: Option<CliDeploymentMode>,

    /// Override the base directory the data/ folder is created in
    #[arg(short, long, env = "PASSKEEPER_BASE_DIR")]
    base_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = CommandLineOptions::parse();

    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(*shell, &mut cmd, "passkeeper", &mut std::io::stdout());
        }
        Commands::Init => {
            let (logger, repository) = prepare(&cli)?;
            repository.initialize()?;
            info!("Database ready at {:?}", repository.connections().path());
            logger.flush();
        }
        Commands::Path => {
            let (logger, repository) = prepare(&cli)?;
            println!("{}", repository.connections().path().display());
            logger.flush();
        }
    }

    Ok(())
}

// Load configuration, apply CLI overrides, build the logger and the repository
fn prepare(cli: &CommandLineOptions) -> Result<(Arc<dyn Log>, Repository)> {
    let config_existed = cli.config_path.exists();
    let mut config = Config::load_or_create(&cli.config_path)
        .with_context(|| format!("Failed to load config file: {:?}", cli.config_path))?;

    // Override config with CLI options if provided
    config.apply_overrides(
        cli.log_level.clone().map(Into::into),
        cli.mode.clone().map(Into::into),
        cli.base_dir.clone(),
    );

    config.validate().context("Configuration validation failed")?;

    let logger: Arc<dyn Log> = Arc::new(
        AppLogger::from_config(&config.log).context("Failed to set up logging")?,
    );
    logging::install_global(logger.clone(), config.log.level.to_level_filter())
        .context("Failed to install logger")?;

    if !config_existed {
        warn!("Config file not found at {:?}, created default config.", cli.config_path);
    }

    let repository = Repository::from_config(&config, logger.clone())?;
    Ok((logger, repository))
}
