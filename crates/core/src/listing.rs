//! Listing generation over a flat binary image.
//!
//! Walks an in-memory image four bytes at a time, decodes each word at its
//! address, and writes one assembly line per word to a caller-supplied
//! sink. The walk owns the program counter; the decoder stays a pure
//! function of each word and its address.

use std::io::Write;

use crate::error::Error;
use crate::isa::disasm::disassemble;

/// Size of a MIPS instruction word in bytes.
pub const WORD_SIZE: usize = 4;

/// Writes the disassembly listing of `image` to `out`.
///
/// Words are consumed in storage order as little-endian 4-byte groups. The
/// first word decodes at address `start + 4` and each successive word 4
/// bytes later, wrapping on overflow. A trailing group of 1-3 bytes is
/// ignored with a warning.
///
/// # Errors
///
/// Returns [`Error::Write`] when the sink rejects a line.
pub fn write_listing<W: Write>(image: &[u8], start: u32, out: &mut W) -> Result<(), Error> {
    tracing::debug!(bytes = image.len(), start = start, "disassembling image");

    let mut pc = start.wrapping_add(WORD_SIZE as u32);
    let mut words = image.chunks_exact(WORD_SIZE);
    for chunk in words.by_ref() {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        writeln!(out, "{}", disassemble(word, pc))?;
        pc = pc.wrapping_add(WORD_SIZE as u32);
    }

    let trailing = words.remainder();
    if !trailing.is_empty() {
        tracing::warn!(
            bytes = trailing.len(),
            "image length is not a multiple of 4; trailing bytes ignored"
        );
    }

    Ok(())
}

/// Parses a `0x`-prefixed hexadecimal start address.
///
/// The prefix is mandatory and case-sensitive; the payload must be
/// non-empty hexadecimal that fits in 32 bits. `0x0` is accepted.
///
/// # Errors
///
/// Returns [`Error::StartAddressNotHex`] when the prefix is missing or the
/// payload is empty, and [`Error::StartAddressInvalid`] when the payload
/// does not parse.
pub fn parse_start_address(text: &str) -> Result<u32, Error> {
    let digits = text.strip_prefix("0x").ok_or_else(|| Error::StartAddressNotHex {
        text: text.to_owned(),
    })?;
    if digits.is_empty() {
        return Err(Error::StartAddressNotHex {
            text: text.to_owned(),
        });
    }
    u32::from_str_radix(digits, 16).map_err(|_| Error::StartAddressInvalid {
        text: text.to_owned(),
    })
}
