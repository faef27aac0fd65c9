//! HireMe report printer.
//!
//! Renders one quote or a batch of quotes into a printable HTML document
//! and writes it to a directory or to standard output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use hireme_core::report::{ReportConfig, ReportOverrides, ReportService};
use hireme_core::sink::{DocumentSink, FileSink, StdoutSink};
use hireme_core::{QuoteRecord, Role};
use hireme_shared::config::LoggingConfig;
use hireme_shared::{AppConfig, AppError};

/// Render HireMe quote reports
#[derive(Parser, Debug)]
#[command(name = "hireme-print", version)]
#[command(about = "Render printable quote reports as self-contained HTML")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON object with report overrides (camelCase keys)
    #[arg(long, short = 'o', global = true)]
    overrides: Option<PathBuf>,

    /// Write documents into this directory instead of standard output
    #[arg(long, short = 'd', global = true, env = "HIREME_OUT_DIR")]
    out_dir: Option<PathBuf>,

    /// Perspective the report is written from (client, provider, admin)
    #[arg(long, short = 'r', global = true)]
    role: Option<Role>,

    /// Extra configuration file layered over config/default and config/{RUN_MODE}
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a report for one quote
    Single {
        /// JSON file holding one quote record
        #[arg(long, short = 'i')]
        input: PathBuf,
    },
    /// Render one combined report for many quotes
    Batch {
        /// JSON file holding an array of quote records
        #[arg(long, short = 'i')]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => return report_failure(&anyhow::Error::from(AppError::from(err))),
    };
    init_tracing(&config.logging);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn report_failure(err: &anyhow::Error) -> ExitCode {
    let code = err
        .downcast_ref::<AppError>()
        .map_or(1, AppError::exit_code);
    let label = err
        .downcast_ref::<AppError>()
        .map_or("INTERNAL_ERROR", AppError::error_code);

    error!(code = label, error = %err, "Report generation failed");
    eprintln!("error[{label}]: {err:#}");
    ExitCode::from(code)
}

fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let base = ReportConfig::resolve(&ReportOverrides::from_settings(&config.report));

    let mut overrides = match &cli.overrides {
        Some(path) => {
            let value: serde_json::Value = read_json(path)?;
            ReportOverrides::from_json(&value)
        }
        None => ReportOverrides::default(),
    };
    if cli.role.is_some() {
        overrides = overrides.then(&ReportOverrides {
            role: cli.role,
            ..ReportOverrides::default()
        });
    }

    let sink: Box<dyn DocumentSink> = match cli.out_dir.as_ref().or(config.output.dir.as_ref()) {
        Some(dir) => {
            info!(dir = %dir.display(), "Writing documents to directory");
            Box::new(FileSink::new(dir))
        }
        None => Box::new(StdoutSink::stdout()),
    };
    let service = ReportService::new(base, sink);

    match cli.command {
        Command::Single { input } => {
            let record: QuoteRecord = read_json(&input)?;
            info!(quote_id = record.id, "Rendering single report");
            service
                .generate_report(&record, &overrides)
                .map_err(AppError::from)?;
        }
        Command::Batch { input } => {
            let records: Vec<QuoteRecord> = read_json(&input)?;
            info!(records = records.len(), "Rendering batch report");
            service
                .generate_batch_report(&records, &overrides)
                .map_err(AppError::from)?;
        }
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path)
        .map_err(|err| AppError::InvalidInput(format!("{}: {err}", path.display())))?;
    let value = serde_json::from_str(&raw)
        .map_err(AppError::from)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(value)
}
