//! Command-line interface components.

use crate::config::WindsConfig;
use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_STATION, LOG_TARGET};
use crate::models::WindReport;
use clap::{Parser, ValueEnum};
use colored::*;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Output format for the finished distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "metar-winds")]
#[command(about = "Count METAR wind directions per compass sector across a directory of bulletins")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory holding the bulletin files
    #[arg(value_name = "INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// ICAO identifier of the station to count
    #[arg(short, long, default_value = DEFAULT_STATION)]
    pub station: String,

    /// Maximum number of files processed concurrently (default: CPU count)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Include files in subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the run configuration from the arguments
    pub fn to_config(&self) -> WindsConfig {
        let defaults = WindsConfig::default();
        WindsConfig {
            station: self.station.clone(),
            max_concurrent_files: self.jobs.unwrap_or(defaults.max_concurrent_files),
            recursive: self.recursive,
            show_progress: !self.no_progress && !self.quiet && self.format == OutputFormat::Text,
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Render a finished report as colored text
pub fn render_text(report: &WindReport, elapsed: Duration) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        "Wind direction distribution for".bright_green().bold(),
        report.station.bright_white().bold()
    ));
    out.push_str(&format!(
        "  {} {}  {} {}  {} {}\n\n",
        "Files:".bright_cyan(),
        report.stats.files_processed,
        "Reports:".bright_cyan(),
        report.stats.reports_found,
        "Wind groups:".bright_cyan(),
        report.stats.wind_tokens
    ));

    for line in &report.sectors {
        let marker = if report.dominant == Some(line.sector) {
            "*".bright_yellow().bold().to_string()
        } else {
            " ".to_string()
        };
        out.push_str(&format!(
            "  {} {:<3} {:<10} {:>8} {:>6.1}%\n",
            marker,
            line.abbreviation,
            line.sector.name(),
            line.count,
            line.share_percent
        ));
    }

    if report.stats.variable_winds > 0 {
        out.push_str(&format!(
            "\n  {} {} (counted once in every sector)\n",
            "Variable winds:".bright_cyan(),
            report.stats.variable_winds
        ));
    }

    out.push_str(&format!("\n{}\n", report.counts));
    out.push_str(&format!("Processing took {:?}\n", elapsed));
    out
}

/// Render a finished report as pretty JSON
pub fn render_json(report: &WindReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
