//! File discovery module for bulletin directories
//!
//! Lists the bulletin files to process. The default is a flat listing of
//! one directory; recursive mode walks every subdirectory.

use crate::error::{Result, WindsError};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::task;
use tracing::debug;
use walkdir::WalkDir;

/// File discovery component for bulletin directories
#[derive(Debug, Clone)]
pub struct FileDiscovery {
    input_path: PathBuf,
    recursive: bool,
}

impl FileDiscovery {
    /// Create a new file discovery instance
    pub fn new(input_path: PathBuf, recursive: bool) -> Self {
        Self {
            input_path,
            recursive,
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Discover all regular files under the input directory, sorted by path
    pub async fn discover_files(&self) -> Result<Vec<PathBuf>> {
        if !self.input_path.is_dir() {
            return Err(WindsError::InputNotFound {
                path: self.input_path.clone(),
            });
        }

        debug!(
            "Searching for bulletin files in: {} (recursive: {})",
            self.input_path.display(),
            self.recursive
        );

        let mut files = if self.recursive {
            let root = self.input_path.clone();
            task::spawn_blocking(move || walk_files(&root))
                .await
                .map_err(|e| WindsError::worker_failed(format!("directory walk panicked: {e}")))??
        } else {
            self.list_files().await?
        };

        files.sort();
        debug!("Found {} bulletin files", files.len());
        Ok(files)
    }

    /// Regular files directly inside the input directory
    async fn list_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut dir = fs::read_dir(&self.input_path).await?;

        while let Some(entry) = dir.next_entry().await? {
            let file_type = entry.file_type().await?;
            if file_type.is_file() {
                files.push(entry.path());
            } else {
                debug!("Skipping non-file entry: {}", entry.path().display());
            }
        }

        Ok(files)
    }
}

/// Regular files anywhere below `root`
fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
