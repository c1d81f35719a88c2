//! Crate error types.
//!
//! Construction of a [`FastTextEmbeddings`](crate::embedding::FastTextEmbeddings)
//! adapter can fail in exactly two domain-level ways — bad configuration or an
//! unreadable model — plus the I/O and download failures underneath them.
//! Annotation never fails: lookup errors are absorbed into zero vectors.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WordcastError>;

#[derive(Debug, Error)]
pub enum WordcastError {
    /// The model location is unset, or points at a local path that does not exist.
    #[error("embeddings \"{0}\" is not available or is not a valid path")]
    Configuration(String),

    /// The selected backend could not parse the model file. Propagated unmodified.
    #[error(transparent)]
    Load(#[from] finalfusion::error::Error),

    /// Downloading a remote model into the cache failed.
    #[error("failed to fetch model from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Filesystem errors while opening the model or writing to the cache.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WordcastError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
