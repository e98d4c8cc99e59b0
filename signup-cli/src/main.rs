mod command;
mod paths;
mod repl;
mod view;

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use signup_lib::error::ConfigError;
use signup_lib::{FormConfig, FormSession};
use simplelog::{Config, WriteLogger};

use crate::view::TerminalView;

#[derive(Parser)]
#[command(name = "signup", version, about = "Interactive registration form validator")]
struct Cli {
    /// JSON config file (defaults to config.json in the config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level for the log file
    #[arg(long, value_enum, default_value_t = LogLevel::Debug)]
    log_level: LogLevel,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Copy, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Logging is best effort: failures are reported and the CLI runs without a
/// log file.
fn init_logging(level: LevelFilter) {
    let Some(path) = paths::log_file() else {
        eprintln!("Warning: no home directory, logging disabled");
        return;
    };
    if let Err(e) = paths::prepare_log(&path) {
        eprintln!("Warning: cannot prepare log file {}: {}", path.display(), e);
    }
    let log_file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: cannot create log file {}: {}", path.display(), e);
            return;
        }
    };
    if let Err(e) = WriteLogger::init(level, Config::default(), log_file) {
        eprintln!("Warning: failed to initialize logger: {}", e);
    }
}

/// Explicit path, then the default config file if present, then defaults.
fn load_config(explicit: Option<PathBuf>) -> Result<FormConfig, ConfigError> {
    if let Some(path) = explicit {
        return FormConfig::load(path);
    }
    match paths::config_file() {
        Some(path) if path.exists() => FormConfig::load(path),
        _ => Ok(FormConfig::default()),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.into());

    let config = match load_config(cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!("starting with {:?}", config);

    let view = Arc::new(TerminalView::new(!cli.no_color));
    let session = FormSession::with_view(config, view.clone());

    if let Err(e) = repl::run(session, view).await {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
