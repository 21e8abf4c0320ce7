//! Tree-guided decoding.
//!
//! The walk is a two-state machine: `AtRoot` or `Descending(node)`. Each bit
//! moves one edge (0 = left, 1 = right); reaching a leaf emits its symbol
//! and returns to `AtRoot`.

use crate::bits;
use crate::node::{Node, NodeId};
use crate::tree::HuffmanTree;
use hp_core::error::{HuffError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    AtRoot,
    Descending(NodeId),
}

/// Decodes bitstreams produced against one tree.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    tree: &'a HuffmanTree,
}

impl<'a> Decoder<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Self { tree }
    }

    /// Decode packed bytes.
    ///
    /// With `bit_len`, exactly that many bits are consumed and the packed
    /// length must be the minimal byte count for it. Without it every
    /// packed bit is walked: a partial path left by zero padding is
    /// dropped, but padding that completes a code emits that symbol.
    pub fn decode(&self, packed: &[u8], bit_len: Option<usize>) -> Result<Vec<u8>> {
        let view = bits::view(packed);
        let limit = match bit_len {
            Some(n) if bits::packed_len(n) != packed.len() => {
                return Err(HuffError::mismatch(format!(
                    "{} packed bytes cannot hold exactly {n} bits",
                    packed.len()
                )));
            }
            Some(n) => n,
            None => view.len(),
        };
        self.decode_bits(view[..limit].iter().by_vals(), bit_len.is_some())
    }

    /// Walk a logical bit sequence. `exact` makes a trailing partial path
    /// an error instead of padding.
    pub fn decode_bits(&self, bits: impl IntoIterator<Item = bool>, exact: bool) -> Result<Vec<u8>> {
        let root = self.tree.root();
        let Some(root_node) = self.tree.get(root) else {
            return Err(HuffError::decode_error(0, format!("root #{root} missing")));
        };
        if let Node::Leaf { symbol, .. } = *root_node {
            return decode_single(symbol, bits);
        }

        let mut out = Vec::new();
        let mut state = WalkState::AtRoot;
        let mut consumed = 0;

        for (bit_index, bit) in bits.into_iter().enumerate() {
            let from = match state {
                WalkState::AtRoot => root,
                WalkState::Descending(id) => id,
            };
            let next = match self.tree.get(from) {
                Some(Node::Internal { left, right, .. }) => {
                    if bit {
                        *right
                    } else {
                        *left
                    }
                }
                _ => return Err(HuffError::decode_error(bit_index, format!("node #{from} has no children"))),
            };
            state = match self.tree.get(next) {
                Some(Node::Leaf { symbol, .. }) => {
                    out.push(*symbol);
                    WalkState::AtRoot
                }
                Some(Node::Internal { .. }) => WalkState::Descending(next),
                None => return Err(HuffError::decode_error(bit_index, format!("missing child #{next}"))),
            };
            consumed = bit_index + 1;
        }

        if let WalkState::Descending(id) = state {
            if exact {
                return Err(HuffError::decode_error(consumed, format!("bit stream ended inside node #{id}")));
            }
            tracing::debug!(node = id, "dropping partial trailing path");
        }

        tracing::debug!(bits = consumed, output_len = out.len(), "decoded");
        Ok(out)
    }
}

/// A leaf root has no edges to follow: every `0` is one occurrence.
fn decode_single(symbol: u8, bits: impl IntoIterator<Item = bool>) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for (bit_index, bit) in bits.into_iter().enumerate() {
        if bit {
            return Err(HuffError::decode_error(bit_index, "single-symbol stream contains a 1 bit"));
        }
        out.push(symbol);
    }
    Ok(out)
}

/// Decode `packed` against `tree`; see [`Decoder::decode`].
pub fn decode(tree: &HuffmanTree, packed: &[u8], bit_len: Option<usize>) -> Result<Vec<u8>> {
    Decoder::new(tree).decode(packed, bit_len)
}
