use super::{write_byte_array, EmitContext, Emitter};
use crate::mode::OutputMode;
use std::io::{self, Write};

/// `extern` pointer and size in the header, storage in the source file.
///
/// The array itself is private to the source file (`<name>_bytes_data`); the exported
/// `<name>_bytes` is a constant pointer to it, so the header can be declared without
/// knowing the length.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternPairEmitter;

impl Emitter for ExternPairEmitter {
    fn mode(&self) -> OutputMode {
        OutputMode::ExternPair
    }

    fn write_declarations(&self, ctx: &EmitContext, out: &mut dyn Write) -> io::Result<()> {
        let name = ctx.name();
        writeln!(out, "extern const unsigned char* const {name}_bytes;")?;
        writeln!(out, "extern const size_t               {name}_size;")
    }

    fn write_definitions(&self, ctx: &EmitContext, out: &mut dyn Write) -> io::Result<()> {
        let name = ctx.name();
        write_byte_array(ctx, out, "static ", &format!("{name}_bytes_data"))?;
        writeln!(out)?;
        writeln!(
            out,
            "const unsigned char* const {name}_bytes = {name}_bytes_data;"
        )?;
        writeln!(out, "const size_t               {name}_size = {};", ctx.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::emit::test_prelude::render;
    use crate::mode::OutputMode;

    #[test]
    fn header_only_declares() {
        let (header, _) = render(OutputMode::ExternPair, "my_data", &[0x00, 0x41, 0xFF]);
        assert!(header.contains("extern const unsigned char* const my_data_bytes;\n"));
        assert!(header.contains("extern const size_t               my_data_size;\n"));
        assert!(!header.contains('='));
    }

    #[test]
    fn source_defines_storage_pointer_and_size() {
        let (_, source) = render(OutputMode::ExternPair, "my_data", &[0x00, 0x41, 0xFF]);
        let expected = "#include \"my_data.h\"\n\
                        \n\
                        static const unsigned char my_data_bytes_data[3] = {\n\
                        \t0x00, 0x41, 0xff\n\
                        };\n\
                        \n\
                        const unsigned char* const my_data_bytes = my_data_bytes_data;\n\
                        const size_t               my_data_size = 3;\n";
        assert_eq!(source, expected);
    }
}
