use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort the whole run. Missing or stale targets are reported
/// as violations instead and never show up here.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read modification time of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
