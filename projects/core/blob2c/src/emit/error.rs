//! Error types for artifact emission.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for emit operations
pub type EmitResult<T> = Result<T, EmitError>;

/// Errors that can occur while writing the generated artifacts.
///
/// Artifacts already written before the failure are left on disk.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The artifact could not be opened for writing
    #[error("can't open the file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to (or flushing) the artifact failed
    #[error("can't write the file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EmitError {
    /// The artifact the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Create { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
