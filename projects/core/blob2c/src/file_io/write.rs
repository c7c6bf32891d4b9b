//! Writing the generated artifacts to disk.

use crate::emit::{
    emitter_for, write_declaration_artifact, write_definition_artifact, EmitContext, EmitError,
    EmitResult,
};
use crate::mode::OutputMode;
use crate::symbol::SymbolName;
use crate::target::EmissionTarget;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Paths of the artifacts written by [`emit_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFiles {
    /// The declaration artifact, always written
    pub header: PathBuf,
    /// The definition artifact, for modes that have one
    pub source: Option<PathBuf>,
}

impl EmittedFiles {
    /// All written paths, header first.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        core::iter::once(self.header.as_path()).chain(self.source.as_deref())
    }
}

/// Renders `bytes` in the style selected by `mode` and writes the artifacts next to `target`.
///
/// The header (`<stem>.h`) is written and closed before the source file (`<stem>.c`) is
/// created. If the second artifact fails, the first one stays on disk.
///
/// # Arguments
///
/// * `mode` - Output style
/// * `target` - Stem the artifact paths are derived from
/// * `symbol` - Base name of the generated declarations
/// * `bytes` - The blob contents
///
/// # Returns
///
/// The paths written, or an [`EmitError`] naming the artifact that failed.
pub fn emit_files(
    mode: OutputMode,
    target: &EmissionTarget,
    symbol: &SymbolName,
    bytes: &[u8],
) -> EmitResult<EmittedFiles> {
    let emitter = emitter_for(mode);
    let include = target.header_include_name();
    let ctx = EmitContext::new(symbol, bytes, &include);

    let header = target.header_path();
    write_artifact(&header, |out| {
        write_declaration_artifact(emitter, &ctx, out)
    })?;

    let source = if mode.has_definition() {
        let source = target.source_path();
        write_artifact(&source, |out| write_definition_artifact(emitter, &ctx, out))?;
        Some(source)
    } else {
        None
    };

    Ok(EmittedFiles { header, source })
}

/// Creates `path`, runs `render` against a buffered writer and flushes it.
///
/// The file is closed before returning, on success and on failure.
fn write_artifact<F>(path: &Path, render: F) -> EmitResult<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let file = File::create(path).map_err(|source| EmitError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut out = BufWriter::new(file);
    render(&mut out)
        .and_then(|()| out.flush())
        .map_err(|source| EmitError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::tempdir;

    #[rstest]
    #[case::single_header(OutputMode::SingleHeader, false)]
    #[case::extern_pair(OutputMode::ExternPair, true)]
    #[case::accessor_functions(OutputMode::AccessorFunctions, true)]
    #[case::struct_extern(OutputMode::StructExtern, true)]
    #[case::struct_accessor(OutputMode::StructAccessor, true)]
    fn writes_expected_artifacts(#[case] mode: OutputMode, #[case] has_source: bool) {
        let temp_dir = tempdir().unwrap();
        let target = EmissionTarget::new(temp_dir.path().join("blob"));
        let symbol = SymbolName::new("blob").unwrap();

        let written = emit_files(mode, &target, &symbol, &[0xDE, 0xAD]).unwrap();

        assert_eq!(written.header, temp_dir.path().join("blob.h"));
        assert!(written.header.is_file());
        assert_eq!(written.source.is_some(), has_source);
        assert_eq!(temp_dir.path().join("blob.c").exists(), has_source);
        assert_eq!(written.paths().count(), 1 + usize::from(has_source));

        let all: String = written
            .paths()
            .map(|p| fs::read_to_string(p).unwrap())
            .collect();
        assert!(all.contains("0xde, 0xad"));
    }

    #[test]
    fn source_includes_header_by_file_name() {
        let temp_dir = tempdir().unwrap();
        let target = EmissionTarget::new(temp_dir.path().join("nested_blob"));
        let symbol = SymbolName::new("blob").unwrap();

        let written = emit_files(OutputMode::ExternPair, &target, &symbol, &[1]).unwrap();
        let source = fs::read_to_string(written.source.unwrap()).unwrap();
        assert!(source.starts_with("#include \"nested_blob.h\"\n"));
    }

    #[test]
    fn missing_directory_reports_create_error() {
        let temp_dir = tempdir().unwrap();
        let target = EmissionTarget::new(temp_dir.path().join("missing").join("blob"));
        let symbol = SymbolName::new("blob").unwrap();

        let err = emit_files(OutputMode::SingleHeader, &target, &symbol, &[1]).unwrap_err();
        assert!(matches!(err, EmitError::Create { .. }), "{err:?}");
        assert_eq!(err.path(), target.header_path().as_path());
    }

    #[test]
    fn header_stays_when_source_cannot_be_created() {
        let temp_dir = tempdir().unwrap();
        let target = EmissionTarget::new(temp_dir.path().join("blob"));
        let symbol = SymbolName::new("blob").unwrap();
        // A directory in the way of the source file.
        fs::create_dir(target.source_path()).unwrap();

        let err = emit_files(OutputMode::StructExtern, &target, &symbol, &[1]).unwrap_err();
        assert!(matches!(err, EmitError::Create { .. }), "{err:?}");
        assert_eq!(err.path(), target.source_path().as_path());
        assert!(target.header_path().is_file());
    }

    #[test]
    fn failed_render_reports_write_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("blob.h");

        let err = write_artifact(&path, |_| Err(io::Error::other("device is full"))).unwrap_err();
        match &err {
            EmitError::Write { source, .. } => assert_eq!(source.to_string(), "device is full"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().starts_with("can't write the file"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn full_device_reports_write_error() {
        let temp_dir = tempdir().unwrap();
        let target = EmissionTarget::new(temp_dir.path().join("blob"));
        let symbol = SymbolName::new("blob").unwrap();
        std::os::unix::fs::symlink("/dev/full", target.header_path()).unwrap();

        let err = emit_files(OutputMode::SingleHeader, &target, &symbol, &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, EmitError::Write { .. }), "{err:?}");
        assert_eq!(err.path(), target.header_path().as_path());
    }

    #[test]
    fn overwrites_existing_artifacts() {
        let temp_dir = tempdir().unwrap();
        let target = EmissionTarget::new(temp_dir.path().join("blob"));
        let symbol = SymbolName::new("blob").unwrap();
        fs::write(target.header_path(), "stale contents that are much longer than the output").unwrap();

        emit_files(OutputMode::SingleHeader, &target, &symbol, &[1]).unwrap();
        let header = fs::read_to_string(target.header_path()).unwrap();
        assert!(header.starts_with("#pragma once"));
        assert!(!header.contains("stale"));
    }
}
