//! Influx - Entry Point
//!
//! Loads configuration, applies command line overrides, runs every pass over
//! the discovered declarations and prints the build report.
//!
//! ## Exit Status
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Build passed |
//! | 1 | Invalid declarations or a dependency cycle were reported |
//! | 2 | Configuration, scan or emit failure |

use anyhow::Context;
use clap::Parser;
use influx_infrastructure::config::loader::validate_app_config;
use influx_infrastructure::config::{AppConfig, ConfigLoader, ReportFormat};
use influx_infrastructure::logging::init_logging;
use influx_infrastructure::run_build;
use influx_validate::{BuildReport, Reporter};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line interface for Influx
#[derive(Parser, Debug)]
#[command(name = "influx")]
#[command(about = "Influx - Build-time dependency injection metadata compiler")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report format (human or json)
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Root directory of generated artifacts
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Resolve and report without writing artifacts
    #[arg(long)]
    pub no_emit: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Declaration files or directories (defaults to `scan.input_dirs`)
    pub inputs: Vec<PathBuf>,
}

impl Cli {
    /// Configuration from file and environment, with flags applied on top
    fn resolve_config(&self) -> anyhow::Result<AppConfig> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        let mut config = loader.load().context("Failed to load configuration")?;

        if !self.inputs.is_empty() {
            config.scan.input_dirs.clone_from(&self.inputs);
        }
        if let Some(format) = self.format {
            config.report.format = format;
        }
        if let Some(output_dir) = &self.output_dir {
            config.emit.output_dir.clone_from(output_dir);
        }
        if self.no_emit {
            config.emit.enabled = false;
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }

        validate_app_config(&config).context("Invalid command line overrides")?;
        Ok(config)
    }
}

fn render(report: &BuildReport, format: ReportFormat) -> String {
    match format {
        ReportFormat::Human => Reporter::to_human_readable(report),
        ReportFormat::Json => Reporter::to_json(report),
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = cli.resolve_config()?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let report = run_build(&config).context("Build failed")?;
    println!("{}", render(&report, config.report.format));
    Ok(report.summary.passed)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
