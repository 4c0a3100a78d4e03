//! Error types for image loading and listing generation.
//!
//! One enum covers every fallible path in the crate. The decoder itself is
//! infallible by design: unrecognized encodings are reported in the listing
//! text, per word, and never abort the walk.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading an image or writing a listing.
#[derive(Debug, Error)]
pub enum Error {
    /// The binary image could not be read from disk.
    #[error("could not read '{}': {source}", path.display())]
    Read {
        /// Path of the image that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A start address was given without the mandatory `0x` prefix.
    #[error("start address '{text}' must be a 0x-prefixed hexadecimal value")]
    StartAddressNotHex {
        /// The rejected argument text.
        text: String,
    },

    /// A start address whose payload does not parse as a 32-bit hexadecimal
    /// value.
    #[error("invalid value for start address '{text}'")]
    StartAddressInvalid {
        /// The rejected argument text.
        text: String,
    },

    /// The listing could not be written to the output sink.
    #[error("could not write listing: {0}")]
    Write(#[from] io::Error),
}
