//! lifeos-convert - Life OS CSV backup to JSON import converter
//!
//! **Usage:**
//! ```bash
//! lifeos-convert [CSV_PATH] [JSON_PATH] [--config <file>] [--log-level <level>]
//! ```
//!
//! Paths fall back to `LIFEOS_CSV_PATH` / `LIFEOS_JSON_PATH`, then the TOML
//! config, then `backup.csv` / `backup.json`.

use anyhow::Result;
use clap::Parser;
use lifeos_common::config::{
    load_config, resolve_path, LoadedConfig, TomlConfig, CSV_PATH_ENV_VAR, DEFAULT_CSV_PATH,
    DEFAULT_JSON_PATH, JSON_PATH_ENV_VAR,
};
use lifeos_convert::{convert_file, ConvertError, MODULE_NAME};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Convert a Life OS CSV backup into the JSON import format
#[derive(Parser, Debug)]
#[clap(name = "lifeos-convert", version)]
#[clap(about = "Convert a Life OS CSV backup into the JSON import format")]
struct Args {
    /// CSV backup to read [default: backup.csv]
    csv_path: Option<PathBuf>,

    /// JSON document to write [default: backup.json]
    json_path: Option<PathBuf>,

    /// TOML configuration file
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[clap(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(ConvertError::InputNotFound(path)) = e.downcast_ref::<ConvertError>() {
                eprintln!("CSV file not found: {}", path.display());
            } else {
                eprintln!("Conversion failed: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let LoadedConfig { config, source } = load_config(args.config.as_deref(), MODULE_NAME)?;
    init_tracing(args.log_level.as_deref(), &config);

    info!(
        "Starting lifeos-convert v{} [{}] built {}",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP")
    );
    info!("Configuration: {}", source);

    let csv_path = resolve_path(
        args.csv_path.as_deref(),
        CSV_PATH_ENV_VAR,
        config.input.as_deref(),
        DEFAULT_CSV_PATH,
    );
    let json_path = resolve_path(
        args.json_path.as_deref(),
        JSON_PATH_ENV_VAR,
        config.output.as_deref(),
        DEFAULT_JSON_PATH,
    );

    // main() prints the user-facing message; keep the log line below warn
    let summary = convert_file(&csv_path, &json_path).map_err(|e| {
        debug!("Conversion of {} failed: {:?}", csv_path.display(), e);
        e
    })?;

    println!("{}", summary);
    Ok(())
}

/// Logs go to stderr so stdout carries only the summary
fn init_tracing(cli_level: Option<&str>, config: &TomlConfig) {
    let level = cli_level.unwrap_or(&config.logging.level);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
