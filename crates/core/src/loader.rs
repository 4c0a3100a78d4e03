//! Binary image loading.
//!
//! Reads a flat binary of sequential 32-bit instruction words from disk
//! into a byte buffer. The file carries no container format; every four
//! bytes are one instruction word.

use std::fs;
use std::path::Path;

use crate::error::Error;

/// Loads a flat binary image from disk.
///
/// # Errors
///
/// Returns [`Error::Read`] naming the path when the file cannot be read.
pub fn load_binary<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, Error> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
