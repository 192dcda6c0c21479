use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("not a directory: {path:?}")]
    NotADirectory { path: PathBuf },
    #[error("failed to write manifest to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid extension pattern: {0}")]
    InvalidPattern(#[from] globset::Error),
    #[error("unknown profile: {0} (expected `relative` or `web`)")]
    UnknownProfile(String),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
