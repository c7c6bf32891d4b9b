use super::{write_byte_array, write_record_typedef, EmitContext, Emitter, SECTION_SEPARATOR};
use crate::mode::OutputMode;
use std::io::{self, Write};

/// A `{bytes, size}` record type plus an `extern` instance named after the symbol.
///
/// The instance has external linkage (it must, to satisfy the `extern` declaration
/// the source file pulls in through the header); the array it points at stays `static`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructExternEmitter;

impl Emitter for StructExternEmitter {
    fn mode(&self) -> OutputMode {
        OutputMode::StructExtern
    }

    fn write_declarations(&self, ctx: &EmitContext, out: &mut dyn Write) -> io::Result<()> {
        let name = ctx.name();
        write_record_typedef(ctx, out)?;
        writeln!(out)?;
        writeln!(out, "extern const {name}_data {name};")
    }

    fn write_definitions(&self, ctx: &EmitContext, out: &mut dyn Write) -> io::Result<()> {
        let name = ctx.name();
        write_byte_array(ctx, out, "static ", &format!("{name}_bytes"))?;
        writeln!(out)?;
        writeln!(out, "{SECTION_SEPARATOR}")?;
        writeln!(out)?;
        writeln!(
            out,
            "const {name}_data {name} = {{{name}_bytes, {}}};",
            ctx.len()
        )
    }
}
