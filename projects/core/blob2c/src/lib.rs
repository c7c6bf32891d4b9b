//! Renders binary blobs as embeddable C/C++ source code.
//!
//! This crate turns an arbitrary byte sequence into a `const unsigned char` array literal
//! together with the declarations needed to reach it from C or C++, in one of five styles
//! selected by [`OutputMode`].
//!
//! # Features
//!
//! - Conservative identifier validation for the generated symbol names
//! - Streaming hex literal encoder (no intermediate string)
//! - Five output styles: single header, extern pair, accessor functions, struct extern, struct accessor
//! - File based reading and emission behind the `file-io` feature
//!
//! # Example
//!
//! ```
//! use blob2c::{emit::{emit_to_writers, EmitContext}, OutputMode, SymbolName};
//!
//! fn render_header(bytes: &[u8]) -> blob2c::Result<String> {
//!     let symbol = SymbolName::new("my_data")?;
//!     let ctx = EmitContext::new(&symbol, bytes, "my_data.h");
//!
//!     // A single header needs no source stream; anything implementing `Write` works.
//!     let mut header = Vec::new();
//!     emit_to_writers(OutputMode::SingleHeader, &ctx, &mut header, &mut std::io::sink())
//!         .expect("writing to memory cannot fail");
//!     Ok(String::from_utf8_lossy(&header).into_owned())
//! }
//!
//! let header = render_header(&[0x00, 0x41, 0xFF]).unwrap();
//! assert!(header.contains("static const unsigned char my_data_bytes[3]"));
//! assert!(header.contains("0x00, 0x41, 0xff"));
//! assert!(header.contains("static const size_t my_data_size = 3;"));
//! ```

// Core modules
pub mod emit;
pub mod encoder;
pub mod error;
pub mod mode;
pub mod symbol;
pub mod target;

#[cfg(feature = "file-io")]
pub mod file_io;

// Re-export key types
pub use encoder::{write_hex_bytes, BYTES_PER_LINE};
pub use error::{Error, Result};
pub use mode::{OutputMode, UnknownModeError};
pub use symbol::{is_valid_symbol_name, SymbolName, SymbolNameError};
pub use target::EmissionTarget;

#[cfg(feature = "file-io")]
pub use file_io::{emit_files, read_file, ByteBuffer, EmittedFiles};
