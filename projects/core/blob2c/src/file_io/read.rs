//! Loading the input blob.

use super::{ReadError, ReadResult};
use core::ops::Deref;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The complete, immutable contents of an input file.
///
/// Never empty: [`read_file`] rejects empty files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: Box<[u8]>,
}

impl ByteBuffer {
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Reads the whole file at `path` into memory.
///
/// # Arguments
///
/// * `path` - Path to the input file
///
/// # Returns
///
/// The file contents, or a [`ReadError`] if the file cannot be opened, is empty,
/// cannot be buffered in memory, or yields fewer bytes than its reported size.
pub fn read_file(path: &Path) -> ReadResult<ByteBuffer> {
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let size = file
        .metadata()
        .map_err(|source| ReadError::Metadata {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    let expected = usize::try_from(size).map_err(|_| ReadError::TooLarge {
        path: path.to_path_buf(),
        size,
    })?;

    read_exact_len(file, expected, path)
}

/// Reads exactly `expected` bytes from `reader` into a new [`ByteBuffer`].
///
/// `path` is only used for error reporting.
pub(crate) fn read_exact_len<R: Read>(
    reader: R,
    expected: usize,
    path: &Path,
) -> ReadResult<ByteBuffer> {
    if expected == 0 {
        return Err(ReadError::Empty {
            path: path.to_path_buf(),
        });
    }

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(expected)
        .map_err(|source| ReadError::Allocate {
            path: path.to_path_buf(),
            size: expected,
            source,
        })?;

    let read = reader
        .take(expected as u64)
        .read_to_end(&mut bytes)
        .map_err(|source| ReadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    if read != expected {
        return Err(ReadError::ShortRead {
            path: path.to_path_buf(),
            read,
            expected,
        });
    }

    Ok(ByteBuffer {
        bytes: bytes.into_boxed_slice(),
    })
}
