//! Plain byte and text file access.

use hp_core::error::{HuffError, Result};
use std::path::Path;

pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    Ok(std::fs::read(path)?)
}

pub fn write_bytes(path: impl AsRef<Path>, data: &[u8]) -> Result<()> {
    Ok(std::fs::write(path, data)?)
}

/// Read a UTF-8 text file.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    String::from_utf8(read_bytes(path)?).map_err(|e| {
        HuffError::InvalidFormat(format!("{} is not valid UTF-8: {e}", path.display()))
    })
}

pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<()> {
    write_bytes(path, text.as_bytes())
}
