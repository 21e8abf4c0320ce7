//! Huffman tree construction and compact serialization.
//!
//! Nodes live in a flat arena owned by the tree; children are referenced by
//! [`NodeId`]. Every walk over the arena is iterative.

use crate::bits::{self, BitString};
use crate::frequency::FrequencyTable;
use crate::node::{Node, NodeId};
use bitvec::prelude::*;
use hp_core::error::{HuffError, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Child slot not yet filled while deserializing.
const UNSET: NodeId = NodeId::MAX;

/// Upper bound on arena size for a byte alphabet (256 leaves, 255 internals).
const MAX_NODES: usize = 511;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build a tree by repeatedly combining the two lightest nodes.
    ///
    /// Equal frequencies are ordered by arena position: leaves in ascending
    /// symbol order first, then combined nodes in creation order. The first
    /// node extracted becomes the left child.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(HuffError::EmptyInput);
        }

        let mut nodes = Vec::with_capacity(frequencies.len() * 2 - 1);
        let mut heap = BinaryHeap::with_capacity(frequencies.len());

        for (symbol, frequency) in frequencies.iter() {
            let id = nodes.len();
            nodes.push(Node::leaf(symbol, frequency));
            heap.push(Reverse((frequency, id)));
        }

        let root = loop {
            let Reverse((left_freq, left)) = heap
                .pop()
                .ok_or_else(|| HuffError::InvalidTree("priority queue drained".into()))?;
            let Some(Reverse((right_freq, right))) = heap.pop() else {
                break left;
            };

            let frequency = left_freq
                .checked_add(right_freq)
                .ok_or_else(|| HuffError::InvalidTree("frequency overflow".into()))?;
            let id = nodes.len();
            nodes.push(Node::Internal { frequency, left, right });
            heap.push(Reverse((frequency, id)));
        };

        let tree = Self { nodes, root };
        tracing::debug!(
            symbols = frequencies.len(),
            nodes = tree.nodes.len(),
            depth = tree.depth(),
            "built huffman tree"
        );
        Ok(tree)
    }

    /// Count `data` and build its tree.
    pub fn from_data(data: &[u8]) -> Result<Self> {
        Self::build(&FrequencyTable::from_bytes(data))
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The root is a leaf only for a one-symbol alphabet.
    pub fn is_single_leaf(&self) -> bool {
        self.get(self.root).is_some_and(Node::is_leaf)
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Combined frequency at the root.
    pub fn weight(&self) -> u64 {
        self.get(self.root).map_or(0, Node::frequency)
    }

    /// Longest root-to-leaf path, in edges.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            match self.get(id).and_then(Node::children) {
                Some((left, right)) => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
                None => max = max.max(depth),
            }
        }
        max
    }

    /// Leaf frequencies as a table. Deserialized trees report zero counts,
    /// which the table drops.
    pub fn frequencies(&self) -> FrequencyTable {
        self.nodes
            .iter()
            .filter_map(|n| match n {
                Node::Leaf { symbol, frequency } => Some((*symbol, *frequency)),
                Node::Internal { .. } => None,
            })
            .collect()
    }

    /// Indented dump of the structure, left branch before right.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root, 0usize, "root")];
        while let Some((id, depth, label)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match self.get(id) {
                Some(Node::Leaf { symbol, frequency }) => {
                    out.push_str(&format!(
                        "{indent}{label} -> leaf {:?} ({symbol}) [weight: {frequency}]\n",
                        *symbol as char
                    ));
                }
                Some(Node::Internal { frequency, left, right }) => {
                    out.push_str(&format!("{indent}{label} -> internal [weight: {frequency}]\n"));
                    stack.push((*right, depth + 1, "R"));
                    stack.push((*left, depth + 1, "L"));
                }
                None => out.push_str(&format!("{indent}{label} -> <missing #{id}>\n")),
            }
        }
        out
    }

    /// Pre-order bit encoding, packed MSB-first: `1` followed by eight
    /// symbol bits for a leaf, `0` for an internal node followed by its left
    /// then right subtree. Frequencies are not stored.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out: BitVec<u8, Msb0> = BitVec::with_capacity(self.nodes.len() * 9);
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            match self.get(id) {
                Some(Node::Leaf { symbol, .. }) => {
                    out.push(true);
                    out.extend_from_bitslice(symbol.view_bits::<Msb0>());
                }
                Some(Node::Internal { left, right, .. }) => {
                    out.push(false);
                    stack.push(*right);
                    stack.push(*left);
                }
                None => {}
            }
        }
        bits::pack(&BitString::from(out))
    }

    /// Rebuild a tree written by [`HuffmanTree::serialize`].
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let mut reader = BitReader { bits: bits::view(bytes), pos: 0 };

        let mut nodes: Vec<Node> = Vec::new();
        let mut seen = [false; 256];
        // Internal nodes still waiting for a child.
        let mut pending: Vec<NodeId> = Vec::new();

        loop {
            if nodes.len() >= MAX_NODES {
                return Err(HuffError::InvalidTree(format!("more than {MAX_NODES} nodes")));
            }

            let id = nodes.len();
            let is_leaf = reader.take(1)?[0];
            if is_leaf {
                let symbol: u8 = reader.take(8)?.load_be();
                if std::mem::replace(&mut seen[symbol as usize], true) {
                    return Err(HuffError::InvalidTree(format!("duplicate leaf {symbol:#04x}")));
                }
                nodes.push(Node::leaf(symbol, 0));
            } else {
                nodes.push(Node::Internal { frequency: 0, left: UNSET, right: UNSET });
            }

            if let Some(&parent) = pending.last() {
                if let Some(Node::Internal { left, right, .. }) = nodes.get_mut(parent) {
                    if *left == UNSET {
                        *left = id;
                    } else {
                        *right = id;
                        pending.pop();
                    }
                }
            }

            if !is_leaf {
                pending.push(id);
            }
            if pending.is_empty() {
                break;
            }
        }

        let rest = reader.rest();
        if rest.len() >= 8 || rest.any() {
            return Err(HuffError::InvalidTree(format!(
                "{} unexpected trailing bits",
                rest.len()
            )));
        }

        Ok(Self { nodes, root: 0 })
    }
}

/// Forward-only cursor over serialized tree bits.
struct BitReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    pos: usize,
}

impl<'a> BitReader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a BitSlice<u8, Msb0>> {
        let bits: &'a BitSlice<u8, Msb0> = self.bits;
        let chunk = bits
            .get(self.pos..self.pos + n)
            .ok_or_else(|| HuffError::InvalidTree(format!("truncated at bit {}", self.pos)))?;
        self.pos += n;
        Ok(chunk)
    }

    fn rest(&self) -> &'a BitSlice<u8, Msb0> {
        let bits: &'a BitSlice<u8, Msb0> = self.bits;
        &bits[self.pos..]
    }
}
