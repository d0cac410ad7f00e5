//! Concurrent per-file workers feeding a single aggregation point
//!
//! One task is spawned per bulletin file. Each reads and scans its file,
//! then sends exactly one message on the result channel. The caller owns
//! the `WindAggregator` and drains exactly as many messages as there are
//! files, so completion never depends on the channel closing.

use crate::aggregator::WindAggregator;
use crate::error::{Result, WindsError};
use crate::extractor::WindExtractor;
use crate::pipeline::{BulletinScan, scan_bulletin};

use indicatif::ProgressBar;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::{self, JoinSet};
use tracing::{debug, error};

/// Result of scanning one bulletin file
#[derive(Debug)]
pub struct FileScan {
    pub path: PathBuf,
    pub scan: BulletinScan,
}

/// Aggregated output of a worker run
#[derive(Debug, Default)]
pub struct WorkerTotals {
    pub aggregator: WindAggregator,
    pub files_processed: usize,
    pub reports_found: usize,
    pub wind_tokens: usize,
}

/// Read one bulletin file and scan it for wind groups
pub async fn scan_file(path: PathBuf, extractor: Arc<WindExtractor>) -> Result<FileScan> {
    let bytes = fs::read(&path)
        .await
        .map_err(|source| WindsError::UnreadableBulletin {
            path: path.clone(),
            source,
        })?;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    let scan = task::spawn_blocking(move || scan_bulletin(&text, &extractor))
        .await
        .map_err(|e| {
            WindsError::worker_failed(format!("scan of {} panicked: {e}", path.display()))
        })?;

    debug!(
        "Scanned {}: {} reports, {} wind groups",
        path.display(),
        scan.reports_found,
        scan.tokens.len()
    );

    Ok(FileScan { path, scan })
}

/// Scan `files` concurrently and aggregate every wind token found
///
/// On the first failure the remaining workers are aborted and awaited
/// before the error is returned.
pub async fn process_files(
    files: &[PathBuf],
    extractor: Arc<WindExtractor>,
    max_concurrent: usize,
    progress: &ProgressBar,
) -> Result<WorkerTotals> {
    let expected = files.len();

    if expected == 0 {
        return Ok(WorkerTotals::default());
    }

    let (tx, mut rx) = mpsc::channel::<Result<FileScan>>(expected);
    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let mut workers = JoinSet::new();

    for path in files.iter().cloned() {
        let tx = tx.clone();
        let semaphore = semaphore.clone();
        let extractor = extractor.clone();

        workers.spawn(async move {
            let outcome = match semaphore.acquire_owned().await {
                Ok(_permit) => scan_file(path, extractor).await,
                Err(_) => Err(WindsError::worker_failed("worker pool closed")),
            };
            // Receiver only disappears after the run has already failed
            let _ = tx.send(outcome).await;
        });
    }
    drop(tx);

    let drained = drain_results(&mut rx, expected, progress).await;
    if drained.is_err() {
        workers.shutdown().await;
    } else {
        while workers.join_next().await.is_some() {}
    }
    drained
}

/// Receive exactly `expected` worker results into one aggregator
async fn drain_results(
    rx: &mut mpsc::Receiver<Result<FileScan>>,
    expected: usize,
    progress: &ProgressBar,
) -> Result<WorkerTotals> {
    let mut totals = WorkerTotals::default();

    for received in 0..expected {
        let outcome = rx.recv().await.ok_or_else(|| {
            WindsError::worker_failed(format!(
                "result channel closed after {received} of {expected} files"
            ))
        })?;

        let file_scan = outcome.inspect_err(|e| error!("Bulletin processing failed: {:#}", e))?;

        totals.aggregator.record_tokens(&file_scan.scan.tokens);
        totals.files_processed += 1;
        totals.reports_found += file_scan.scan.reports_found;
        totals.wind_tokens += file_scan.scan.tokens.len();

        if let Some(file_name) = file_scan.path.file_name() {
            progress.set_message(format!("Processed: {}", file_name.to_string_lossy()));
        }
        progress.inc(1);
    }

    Ok(totals)
}
