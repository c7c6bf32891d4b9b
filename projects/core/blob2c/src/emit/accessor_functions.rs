use super::{write_byte_array, EmitContext, Emitter, SECTION_SEPARATOR};
use crate::mode::OutputMode;
use std::io::{self, Write};

/// Accessor prototypes in the header; storage and bodies in the source file.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessorFunctionsEmitter;

impl Emitter for AccessorFunctionsEmitter {
    fn mode(&self) -> OutputMode {
        OutputMode::AccessorFunctions
    }

    fn write_declarations(&self, ctx: &EmitContext, out: &mut dyn Write) -> io::Result<()> {
        let name = ctx.name();
        writeln!(out, "const unsigned char* get_{name}_bytes(void);")?;
        writeln!(out, "size_t               get_{name}_size(void);")
    }

    fn write_definitions(&self, ctx: &EmitContext, out: &mut dyn Write) -> io::Result<()> {
        let name = ctx.name();
        write_byte_array(ctx, out, "static ", &format!("{name}_bytes"))?;
        writeln!(out)?;
        writeln!(out, "static const size_t {name}_size = {};", ctx.len())?;
        writeln!(out)?;
        writeln!(out, "{SECTION_SEPARATOR}")?;
        writeln!(out)?;
        writeln!(
            out,
            "const unsigned char* get_{name}_bytes(void) {{ return {name}_bytes; }}"
        )?;
        writeln!(
            out,
            "size_t               get_{name}_size(void)  {{ return {name}_size; }}"
        )
    }
}
