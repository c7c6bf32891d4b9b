use super::{write_byte_array, write_record_typedef, EmitContext, Emitter, SECTION_SEPARATOR};
use crate::mode::OutputMode;
use std::io::{self, Write};

/// The record type plus `get_<name>_data()` returning the address of a static instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructAccessorEmitter;

impl Emitter for StructAccessorEmitter {
    fn mode(&self) -> OutputMode {
        OutputMode::StructAccessor
    }

    fn write_declarations(&self, ctx: &EmitContext, out: &mut dyn Write) -> io::Result<()> {
        let name = ctx.name();
        write_record_typedef(ctx, out)?;
        writeln!(out)?;
        writeln!(out, "const {name}_data* get_{name}_data(void);")
    }

    fn write_definitions(&self, ctx: &EmitContext, out: &mut dyn Write) -> io::Result<()> {
        let name = ctx.name();
        write_byte_array(ctx, out, "static ", &format!("{name}_bytes"))?;
        writeln!(out)?;
        writeln!(out, "{SECTION_SEPARATOR}")?;
        writeln!(out)?;
        writeln!(
            out,
            "static const {name}_data {name}_data_struct = {{{name}_bytes, {}}};",
            ctx.len()
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "const {name}_data* get_{name}_data(void) {{ return &{name}_data_struct; }}"
        )
    }
}
