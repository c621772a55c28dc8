use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown egg size: '{0}'")]
    UnknownSize(String),
    #[error("could not parse date: '{0}'")]
    InvalidDate(String),
    #[error("invalid date range: '{0}' (expected START..END)")]
    InvalidRange(String),
    #[error("no daily logs loaded")]
    EmptyDataset,
}
