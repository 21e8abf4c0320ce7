//! Shared error taxonomy and configuration for the huffpack crates.

pub mod config;
pub mod error;

pub use config::{CodecConfig, HuffConfig, StorageConfig};
pub use error::{HuffError, Result};

#[cfg(test)]
mod tests;
