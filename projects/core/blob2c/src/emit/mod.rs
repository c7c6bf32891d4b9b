//! Generators for the five output styles.
//!
//! Every style produces a declaration artifact (the header) and, except for
//! [`OutputMode::SingleHeader`], a definition artifact (the source file). The parts
//! common to all styles live here:
//!
//! - the header prologue (`#pragma once`, `<stddef.h>`) and the C linkage guards
//! - the `#include` line at the top of the source file
//! - the byte array literal itself
//!
//! Each style implements [`Emitter`] and only writes the declarations and definitions
//! that make it distinct.

mod accessor_functions;
mod error;
mod extern_pair;
mod single_header;
mod struct_accessor;
mod struct_extern;

pub use accessor_functions::AccessorFunctionsEmitter;
pub use error::*;
pub use extern_pair::ExternPairEmitter;
pub use single_header::SingleHeaderEmitter;
pub use struct_accessor::StructAccessorEmitter;
pub use struct_extern::StructExternEmitter;

use crate::encoder::write_hex_bytes;
use crate::mode::OutputMode;
use crate::symbol::SymbolName;
use std::io::{self, Write};

/// Horizontal rule separating storage from the code that exposes it.
pub(crate) const SECTION_SEPARATOR: &str =
    "/* ------------------------------------------------------ */";

/// Everything an emitter needs to render one blob.
#[derive(Debug, Clone, Copy)]
pub struct EmitContext<'a> {
    /// Base name for every generated declaration
    pub symbol: &'a SymbolName,
    /// The blob contents
    pub bytes: &'a [u8],
    /// Name the source file uses to `#include` the header
    pub header_include: &'a str,
}

impl<'a> EmitContext<'a> {
    pub fn new(symbol: &'a SymbolName, bytes: &'a [u8], header_include: &'a str) -> Self {
        Self {
            symbol,
            bytes,
            header_include,
        }
    }

    /// The base symbol as a string slice.
    #[inline]
    pub fn name(&self) -> &str {
        self.symbol.as_str()
    }

    /// Number of bytes in the blob, as declared in the generated code.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// A single output style.
pub trait Emitter: Sync {
    /// The mode this emitter implements.
    fn mode(&self) -> OutputMode;

    /// Write the declarations placed between the C linkage guards of the header.
    fn write_declarations(&self, ctx: &EmitContext, out: &mut dyn Write) -> io::Result<()>;

    /// Write the body of the source file, after its `#include` line.
    ///
    /// Styles without a definition artifact keep the default, which writes nothing.
    fn write_definitions(&self, _ctx: &EmitContext, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Returns the emitter implementing `mode`.
pub fn emitter_for(mode: OutputMode) -> &'static dyn Emitter {
    match mode {
        OutputMode::SingleHeader => &SingleHeaderEmitter,
        OutputMode::ExternPair => &ExternPairEmitter,
        OutputMode::AccessorFunctions => &AccessorFunctionsEmitter,
        OutputMode::StructExtern => &StructExternEmitter,
        OutputMode::StructAccessor => &StructAccessorEmitter,
    }
}

/// Writes the complete declaration artifact (header) for `emitter`.
pub fn write_declaration_artifact(
    emitter: &dyn Emitter,
    ctx: &EmitContext,
    out: &mut dyn Write,
) -> io::Result<()> {
    out.write_all(
        b"#pragma once\n\
          \n\
          #include <stddef.h> /* for size_t */\n\
          \n\
          #ifdef __cplusplus\n\
          extern \"C\" {\n\
          #endif\n\
          \n",
    )?;

    emitter.write_declarations(ctx, out)?;

    out.write_all(
        b"\n\
          #ifdef __cplusplus\n\
          } /* extern \"C\" */\n\
          #endif\n",
    )
}

/// Writes the complete definition artifact (source file) for `emitter`.
pub fn write_definition_artifact(
    emitter: &dyn Emitter,
    ctx: &EmitContext,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out, "#include \"{}\"", ctx.header_include)?;
    writeln!(out)?;
    emitter.write_definitions(ctx, out)
}

/// Renders `mode` into in-memory or otherwise caller provided streams.
///
/// Nothing is written to `source` when `mode` has no definition artifact
/// (see [`OutputMode::has_definition`]).
///
/// # Example
///
/// ```
/// use blob2c::{emit::{emit_to_writers, EmitContext}, OutputMode, SymbolName};
///
/// let symbol = SymbolName::new("icon").unwrap();
/// let ctx = EmitContext::new(&symbol, &[1, 2, 3], "icon.h");
///
/// let (mut header, mut source) = (Vec::new(), Vec::new());
/// emit_to_writers(OutputMode::StructAccessor, &ctx, &mut header, &mut source).unwrap();
///
/// let source = String::from_utf8(source).unwrap();
/// assert!(source.contains("static const unsigned char icon_bytes[3]"));
/// ```
pub fn emit_to_writers(
    mode: OutputMode,
    ctx: &EmitContext,
    header: &mut dyn Write,
    source: &mut dyn Write,
) -> io::Result<()> {
    let emitter = emitter_for(mode);
    write_declaration_artifact(emitter, ctx, header)?;
    if mode.has_definition() {
        write_definition_artifact(emitter, ctx, source)?;
    }
    Ok(())
}

/// Writes `<storage>const unsigned char <array_name>[N] = { ... };`.
///
/// `storage` is either `"static "` or empty.
pub(crate) fn write_byte_array(
    ctx: &EmitContext,
    out: &mut dyn Write,
    storage: &str,
    array_name: &str,
) -> io::Result<()> {
    write!(
        out,
        "{storage}const unsigned char {array_name}[{}] = {{",
        ctx.len()
    )?;
    write_hex_bytes(out, ctx.bytes)?;
    out.write_all(b"\n};\n")
}

/// Writes the `{bytes, size}` record typedef shared by both struct styles.
pub(crate) fn write_record_typedef(ctx: &EmitContext, out: &mut dyn Write) -> io::Result<()> {
    let name = ctx.name();
    writeln!(out, "typedef struct {name}_data")?;
    writeln!(out, "{{")?;
    writeln!(out, "    const unsigned char* bytes;")?;
    writeln!(out, "    size_t               size;")?;
    writeln!(out, "}} {name}_data;")
}
