//! Main processing engine for bulletin directories.
//!
//! Orchestrates a complete run: file discovery, concurrent per-file
//! scanning, single-owner aggregation, and the final wind report.

pub mod discovery;
pub mod workers;

#[cfg(test)]
pub mod tests;

use self::discovery::FileDiscovery;

use crate::config::WindsConfig;
use crate::error::{Result, WindsError};
use crate::extractor::WindExtractor;
use crate::models::{DistributionCounts, ProcessingStats, WindReport};

use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Main processor for a directory of bulletin files
#[derive(Debug)]
pub struct BulletinProcessor {
    input_path: PathBuf,
    config: WindsConfig,
    extractor: Arc<WindExtractor>,
    file_discovery: FileDiscovery,
}

impl BulletinProcessor {
    /// Create a new processor with the default configuration
    pub fn new(input_path: PathBuf) -> Result<Self> {
        Self::with_config(input_path, WindsConfig::default())
    }

    /// Create a new processor with an explicit configuration
    pub fn with_config(input_path: PathBuf, config: WindsConfig) -> Result<Self> {
        config.validate()?;

        // Verify input path exists
        if !input_path.is_dir() {
            return Err(WindsError::InputNotFound { path: input_path });
        }

        let extractor = Arc::new(WindExtractor::new(&config.station)?);

        Ok(Self {
            file_discovery: FileDiscovery::new(input_path.clone(), config.recursive),
            input_path,
            config,
            extractor,
        })
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn config(&self) -> &WindsConfig {
        &self.config
    }

    /// Main processing entry point
    pub async fn process(&self) -> Result<WindReport> {
        let start_time = Instant::now();
        info!(
            "Counting {} winds in {}",
            self.config.station,
            self.input_path.display()
        );

        // Step 1: Discover bulletin files
        let files = self.file_discovery.discover_files().await?;
        info!("Found {} bulletin files", files.len());

        if files.is_empty() {
            let stats = ProcessingStats {
                processing_time_ms: start_time.elapsed().as_millis(),
                ..Default::default()
            };
            return Ok(WindReport::new(
                self.config.station.clone(),
                DistributionCounts::new(),
                stats,
            ));
        }

        // Step 2: Scan files concurrently into one aggregator
        let progress = self.progress_bar(files.len());
        let totals = workers::process_files(
            &files,
            self.extractor.clone(),
            self.config.max_concurrent_files,
            &progress,
        )
        .await;
        progress.finish_and_clear();
        let totals = totals?;

        // Step 3: Assemble the report
        let aggregator = totals.aggregator;
        let stats = ProcessingStats {
            files_processed: totals.files_processed,
            reports_found: totals.reports_found,
            wind_tokens: totals.wind_tokens,
            fixed_winds: aggregator.fixed_winds(),
            variable_winds: aggregator.variable_winds(),
            unrecognized_winds: aggregator.unrecognized_winds(),
            processing_time_ms: start_time.elapsed().as_millis(),
        };

        info!(
            "Processed {} files: {} reports, {} wind groups ({} fixed, {} variable) in {}ms",
            stats.files_processed,
            stats.reports_found,
            stats.wind_tokens,
            stats.fixed_winds,
            stats.variable_winds,
            stats.processing_time_ms
        );

        Ok(WindReport::new(
            self.config.station.clone(),
            aggregator.into_counts(),
            stats,
        ))
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb.set_message("Processing bulletins");
        pb
    }
}
