use super::{write_byte_array, EmitContext, Emitter};
use crate::mode::OutputMode;
use std::io::{self, Write};

/// Everything in one header: `static const` array and size.
///
/// Each translation unit including the header gets its own copy of the data.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleHeaderEmitter;

impl Emitter for SingleHeaderEmitter {
    fn mode(&self) -> OutputMode {
        OutputMode::SingleHeader
    }

    fn write_declarations(&self, ctx: &EmitContext, out: &mut dyn Write) -> io::Result<()> {
        let name = ctx.name();
        write_byte_array(ctx, out, "static ", &format!("{name}_bytes"))?;
        writeln!(out)?;
        writeln!(out, "static const size_t {name}_size = {};", ctx.len())
    }
}
