use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::fixer::{FixOutcome, Transformation, fix_file, inspect_file};

/// Directory holding the transcripts, relative to the repository root
pub const TRANSCRIPT_DIR: [&str; 2] = ["_data", "transcripts"];

/// Transcripts known to arrive in non-canonical form
pub const DEFAULT_FILES: [&str; 4] = [
    "dg_1752254667.csv",
    "dg_1763646599.csv",
    "dg_1752254652.csv",
    "dg_1752254537.csv",
];

/// Which files a batch run visits
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory the file names are resolved against
    pub transcript_dir: PathBuf,
    /// File names, processed in order
    pub files: Vec<String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::from_root(".")
    }
}

impl BatchConfig {
    /// Standard file list under `<root>/_data/transcripts`
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let transcript_dir = TRANSCRIPT_DIR
            .iter()
            .fold(root.as_ref().to_path_buf(), |dir, part| dir.join(part));
        Self {
            transcript_dir,
            files: DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Replace the file list; an empty list keeps the current one
    pub fn with_files(mut self, files: Vec<String>) -> Self {
        if !files.is_empty() {
            self.files = files;
        }
        self
    }

    /// File names paired with their resolved paths
    pub fn paths(&self) -> impl Iterator<Item = (&str, PathBuf)> + '_ {
        self.files
            .iter()
            .map(|name| (name.as_str(), self.transcript_dir.join(name)))
    }
}

/// What happened to one file of the batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Fixed { rows: usize, dropped: usize },
    Empty,
    Missing,
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Per-file outcome of a batch run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn fixed_count(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Fixed { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Failed { .. }))
    }

    pub fn missing_count(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Missing))
    }

    /// Total rows written across all fixed files
    pub fn rows_written(&self) -> usize {
        self.files
            .iter()
            .map(|f| match f.status {
                FileStatus::Fixed { rows, .. } => rows,
                _ => 0,
            })
            .sum()
    }

    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.status)).count()
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Fix every configured file in place.
///
/// Missing files are skipped with a warning. A failure in one file is logged
/// with its full error chain and never stops the remaining files.
pub fn run_batch(config: &BatchConfig) -> BatchReport {
    let mut report = BatchReport::default();

    for (name, path) in config.paths() {
        let status = if path.exists() {
            match fix_file(&path) {
                Ok(FixOutcome::Fixed { rows, dropped, .. }) => FileStatus::Fixed { rows, dropped },
                Ok(FixOutcome::Empty) => FileStatus::Empty,
                Err(err) => {
                    let err = anyhow::Error::new(err);
                    error!("Error processing {}: {:#}", name, err);
                    error!("{:?}", err);
                    FileStatus::Failed {
                        error: format!("{:#}", err),
                    }
                }
            }
        } else {
            warn!("{} not found, skipping", name);
            FileStatus::Missing
        };

        report.files.push(FileReport {
            file: name.to_string(),
            path,
            status,
        });
    }

    info!("Done!");
    report
}

/// Inspection status of one file of the batch
#[derive(Debug, Clone)]
pub enum InspectStatus {
    Ready(Transformation),
    Empty,
    Missing,
    Failed(String),
}

/// Inspect every configured file without writing anything
pub fn inspect_batch(config: &BatchConfig) -> Vec<(String, InspectStatus)> {
    config
        .paths()
        .map(|(name, path)| {
            let status = if !path.exists() {
                InspectStatus::Missing
            } else {
                match inspect_file(&path) {
                    Ok(Some(transformation)) => InspectStatus::Ready(transformation),
                    Ok(None) => InspectStatus::Empty,
                    Err(err) => InspectStatus::Failed(format!("{:#}", anyhow::Error::new(err))),
                }
            };
            (name.to_string(), status)
        })
        .collect()
}
