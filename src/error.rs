use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PsError>;

#[derive(Error, Debug)]
pub enum PsError {
    /// Request to solved.ac failed: transport, timeout, bad status or body.
    #[error("solved.ac request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not determine home directory; pass --root or set PS_ROOT")]
    NoHomeDir,
}

impl PsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PsError::Io {
            path: path.into(),
            source,
        }
    }
}
