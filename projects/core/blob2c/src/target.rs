//! Derivation of artifact paths from the output stem.

use std::ffi::OsString;
use std::path::PathBuf;

/// Suffix of the declaration artifact.
pub const HEADER_SUFFIX: &str = ".h";

/// Suffix of the definition artifact.
pub const SOURCE_SUFFIX: &str = ".c";

/// The output stem every artifact path is derived from.
///
/// The suffixes are appended to the stem verbatim, so a stem of `out/logo.bin`
/// yields `out/logo.bin.h`, not `out/logo.h`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionTarget {
    stem: PathBuf,
}

impl EmissionTarget {
    pub fn new(stem: impl Into<PathBuf>) -> Self {
        Self { stem: stem.into() }
    }

    /// Path of the declaration artifact: `<stem>.h`.
    pub fn header_path(&self) -> PathBuf {
        self.with_suffix(HEADER_SUFFIX)
    }

    /// Path of the definition artifact: `<stem>.c`.
    pub fn source_path(&self) -> PathBuf {
        self.with_suffix(SOURCE_SUFFIX)
    }

    /// Name the definition artifact uses to `#include` the header.
    ///
    /// Only the final path component is used, as both artifacts land in the same directory.
    pub fn header_include_name(&self) -> String {
        let header = self.header_path();
        header
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| header.to_string_lossy().into_owned())
    }

    fn with_suffix(&self, suffix: &str) -> PathBuf {
        let mut path = OsString::from(self.stem.as_os_str());
        path.push(suffix);
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn appends_suffixes_to_stem() {
        let target = EmissionTarget::new("generated/logo");
        assert_eq!(target.header_path(), PathBuf::from("generated/logo.h"));
        assert_eq!(target.source_path(), PathBuf::from("generated/logo.c"));
    }

    #[test]
    fn keeps_existing_extension() {
        let target = EmissionTarget::new("font.ttf");
        assert_eq!(target.header_path(), PathBuf::from("font.ttf.h"));
        assert_eq!(target.header_include_name(), "font.ttf.h");
    }

    #[test]
    fn include_name_drops_directories() {
        let target = EmissionTarget::new(Path::new("a").join("b").join("blob"));
        assert_eq!(target.header_include_name(), "blob.h");
        assert_eq!(target.header_path(), Path::new("a").join("b").join("blob.h"));
    }
}
