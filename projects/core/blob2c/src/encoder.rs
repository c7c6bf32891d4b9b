//! Streaming hex literal encoder.

use std::io::{self, Write};

/// Number of hex literals written on each line of the array body.
pub const BYTES_PER_LINE: usize = 11;

/// Writes `bytes` as comma separated `0xNN` literals.
///
/// A line break followed by a tab is written before every literal whose index is a multiple
/// of [`BYTES_PER_LINE`], including the first one. The `, ` separator precedes the line break,
/// so wrapped lines end with a trailing `, `.
///
/// # Parameters
///
/// - `out`: Destination stream; the literals are written directly into it
/// - `bytes`: The bytes to encode
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// blob2c::write_hex_bytes(&mut out, &[0x00, 0x41, 0xFF]).unwrap();
/// assert_eq!(out, b"\n\t0x00, 0x41, 0xff");
/// ```
pub fn write_hex_bytes<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    for (index, byte) in bytes.iter().enumerate() {
        if index > 0 {
            out.write_all(b", ")?;
        }

        if index % BYTES_PER_LINE == 0 {
            out.write_all(b"\n\t")?;
        }

        write!(out, "0x{byte:02x}")?;
    }

    Ok(())
}
