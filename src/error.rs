use std::path::PathBuf;

use thiserror::Error;

/// Failure while fixing a single transcript file
#[derive(Debug, Error)]
pub enum FixError {
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV in {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to encode canonical CSV for {path:?}")]
    Encode {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FixError>;
