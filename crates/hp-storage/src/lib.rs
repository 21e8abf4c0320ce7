//! On-disk side of huffpack: byte and text sources/sinks, the `.huff`
//! container that carries the tree next to the packed bits, and whole-file
//! compress/decompress.

pub mod container;
pub mod files;
pub mod io;

pub use container::Container;
pub use files::{compress_file, decompress_file, ensure_extension, FileReport};
