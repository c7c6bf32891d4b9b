//! Filesystem side of the pipeline: loading the input blob and writing the artifacts.

mod error;
mod read;
mod write;

pub use error::*;
pub use read::*;
pub use write::*;
