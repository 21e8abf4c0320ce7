//! Whole-file compression.

use crate::container::Container;
use crate::io::{read_bytes, write_bytes};
use hp_codec::Encoder;
use hp_core::config::HuffConfig;
use hp_core::error::{HuffError, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Append `extension` unless `path` already ends with it.
pub fn ensure_extension(path: &Path, extension: &str) -> PathBuf {
    if path.to_string_lossy().ends_with(extension) {
        return path.to_path_buf();
    }
    let mut raw = OsString::from(path.as_os_str());
    raw.push(extension);
    PathBuf::from(raw)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub original_len: u64,
    pub compressed_len: u64,
}

impl FileReport {
    /// Compressed size over original size; 1.0 for an empty original.
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 1.0;
        }
        self.compressed_len as f64 / self.original_len as f64
    }
}

/// Compress `src` into a container at `dst` (extension added if missing).
pub fn compress_file(src: &Path, dst: &Path, config: &HuffConfig) -> Result<FileReport> {
    let data = read_bytes(src)?;
    let encoded = Encoder::new(config.codec.clone()).encode(&data)?;
    let bytes = Container::from_encoded(&encoded).to_bytes()?;

    if config.storage.verify_roundtrip {
        let restored = Container::from_bytes(&bytes)?.decode()?;
        if restored != data {
            return Err(anyhow::anyhow!("round-trip check failed for {}", src.display()).into());
        }
    }

    let destination = ensure_extension(dst, &config.storage.extension);
    write_bytes(&destination, &bytes)?;
    tracing::debug!(
        src = %src.display(),
        dst = %destination.display(),
        original = data.len(),
        compressed = bytes.len(),
        "compressed file"
    );

    Ok(FileReport {
        source: src.to_path_buf(),
        destination,
        original_len: data.len() as u64,
        compressed_len: bytes.len() as u64,
    })
}

/// Restore the original bytes of container `src` into `dst`.
pub fn decompress_file(src: &Path, dst: &Path, config: &HuffConfig) -> Result<FileReport> {
    let bytes = read_bytes(src)?;
    let container = Container::from_bytes(&bytes)?;

    let max = config.codec.max_input_len;
    if container.original_len > max as u64 {
        return Err(HuffError::InputTooLarge {
            len: usize::try_from(container.original_len).unwrap_or(usize::MAX),
            max,
        });
    }

    let data = container.decode()?;
    write_bytes(dst, &data)?;
    tracing::debug!(
        src = %src.display(),
        dst = %dst.display(),
        restored = data.len(),
        "decompressed file"
    );

    Ok(FileReport {
        source: src.to_path_buf(),
        destination: dst.to_path_buf(),
        original_len: data.len() as u64,
        compressed_len: bytes.len() as u64,
    })
}
