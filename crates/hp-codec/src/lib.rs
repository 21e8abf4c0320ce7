//! Huffman codec: lossless byte compression with an explicit, retained tree.
//!
//! Pipeline:
//! 1. Frequency analysis over the input bytes
//! 2. Tree construction by greedy minimum combination
//! 3. Code table derivation (left = 0, right = 1)
//! 4. Symbol substitution and MSB-first bit packing
//!
//! Decoding unpacks the bytes and walks the same tree. The tree is never
//! inferred from the packed bytes; it travels alongside them in [`Encoded`],
//! inside a [`HuffmanCodec`] instance, or serialized via
//! [`HuffmanTree::serialize`].

pub mod bits;
pub mod codec;
pub mod codes;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod node;
pub mod tree;

pub use bits::BitString;
pub use codec::HuffmanCodec;
pub use codes::CodeTable;
pub use decoder::Decoder;
pub use encoder::{Encoded, Encoder};
pub use frequency::FrequencyTable;
pub use node::{Node, NodeId};
pub use tree::HuffmanTree;
