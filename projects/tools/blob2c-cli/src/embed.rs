use crate::args::Invocation;
use blob2c::{emit_files, read_file, EmittedFiles};

/// Outcome of a successful run.
#[derive(Debug)]
pub struct EmbedReport {
    pub input_len: usize,
    pub files: EmittedFiles,
}

/// Reads the input and writes the artifacts for the selected mode.
///
/// Nothing is created when the input cannot be loaded.
pub fn embed(invocation: &Invocation) -> blob2c::Result<EmbedReport> {
    let buffer = read_file(&invocation.input)?;
    let files = emit_files(
        invocation.mode,
        &invocation.target,
        &invocation.symbol,
        &buffer,
    )?;

    Ok(EmbedReport {
        input_len: buffer.len(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use blob2c::{EmissionTarget, OutputMode, SymbolName};
    use std::fs;
    use tempfile::tempdir;

    fn invocation(dir: &std::path::Path, mode: OutputMode) -> Invocation {
        Invocation {
            input: dir.join("input.bin"),
            target: EmissionTarget::new(dir.join("out")),
            symbol: SymbolName::new("my_data").unwrap(),
            mode,
            verbose: false,
        }
    }

    #[test]
    fn reports_written_files() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("input.bin"), [0x00u8, 0x41, 0xFF]).unwrap();

        let report = embed(&invocation(temp_dir.path(), OutputMode::StructExtern)).unwrap();
        assert_eq!(report.input_len, 3);
        assert_eq!(report.files.header, temp_dir.path().join("out.h"));
        assert_eq!(report.files.source, Some(temp_dir.path().join("out.c")));
    }

    #[test]
    fn unreadable_input_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let inv = invocation(temp_dir.path(), OutputMode::ExternPair);

        let err = embed(&inv).unwrap_err();
        assert!(matches!(err, blob2c::Error::Read(_)), "{err:?}");
        assert!(!inv.target.header_path().exists());
        assert!(!inv.target.source_path().exists());
    }
}
