//! MIPS I machine-code disassembler library.
//!
//! This crate implements the decoding and rendering pipeline behind the
//! `mipsdis` binary:
//! 1. **ISA:** Bit-field extraction, opcode and function-code tables, and
//!    the three-format classification of 32-bit MIPS I words.
//! 2. **Disassembly:** Rendering of classified words into assembly lines,
//!    including pseudo-direct jump target reconstruction from the program
//!    counter.
//! 3. **Loading:** Flat binary image loading.
//! 4. **Listing:** The word walk that advances the program counter, feeds
//!    the decoder, and emits one line per instruction to a caller-supplied
//!    sink.

/// Error types for loading and listing.
pub mod error;
/// Instruction set (fields, opcode tables, classification, disassembly).
pub mod isa;
/// Listing generation and start-address parsing.
pub mod listing;
/// Binary image loading.
pub mod loader;

/// Crate-wide error type; every fallible operation returns it.
pub use crate::error::Error;
/// One-line disassembly of a single word at an address.
pub use crate::isa::disasm::disassemble;
/// Listing walk and start-address parsing; construct sinks with `io::Write`.
pub use crate::listing::{parse_start_address, write_listing};
/// Flat binary loading; returns the raw image bytes.
pub use crate::loader::load_binary;
