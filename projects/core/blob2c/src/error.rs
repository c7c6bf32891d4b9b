//! Error types shared across the crate.

use crate::emit::EmitError;
use crate::mode::UnknownModeError;
use crate::symbol::SymbolNameError;
use thiserror::Error;

#[cfg(feature = "file-io")]
use crate::file_io::ReadError;

/// Result type for blob2c operations
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while turning a file into embeddable source.
///
/// Each component reports its own error type; this enum composes them so callers
/// driving the whole read → encode → emit pipeline can use a single `?`.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested symbol name is not a valid identifier
    #[error("Invalid symbol name: {0}")]
    Symbol(#[from] SymbolNameError),

    /// The requested output mode is not registered
    #[error(transparent)]
    UnknownMode(#[from] UnknownModeError),

    /// The input file could not be loaded
    #[cfg(feature = "file-io")]
    #[error(transparent)]
    Read(#[from] ReadError),

    /// An output artifact could not be written
    #[error(transparent)]
    Emit(#[from] EmitError),
}
