//! Error types for reading the input file.

use std::collections::TryReserveError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for read operations
pub type ReadResult<T> = Result<T, ReadError>;

/// Errors that can occur while loading the input file into memory.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened for reading
    #[error("can't open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The size of the file could not be determined
    #[error("can't query the size of file {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file has no content
    #[error("file {} is empty", path.display())]
    Empty { path: PathBuf },

    /// The file is larger than this platform can address
    #[error("file {} is too large to load ({size} bytes)", path.display())]
    TooLarge { path: PathBuf, size: u64 },

    /// Memory for the file contents could not be reserved
    #[error("cannot allocate memory ({size} bytes) to store file's {} content: {source}", path.display())]
    Allocate {
        path: PathBuf,
        size: usize,
        #[source]
        source: TryReserveError,
    },

    /// Reading the file contents failed
    #[error("error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Fewer bytes could be read than the file reported
    #[error("cannot read the whole file {}. (read bytes: {read} != content bytes {expected})", path.display())]
    ShortRead {
        path: PathBuf,
        read: usize,
        expected: usize,
    },
}

impl ReadError {
    /// The input file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Metadata { path, .. }
            | Self::Empty { path }
            | Self::TooLarge { path, .. }
            | Self::Allocate { path, .. }
            | Self::Read { path, .. }
            | Self::ShortRead { path, .. } => path,
        }
    }
}
