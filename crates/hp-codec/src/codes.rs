//! Symbol → bit-string code derivation.

use crate::bits::BitString;
use crate::frequency::FrequencyTable;
use crate::node::Node;
use crate::tree::HuffmanTree;
use serde::Serialize;
use std::collections::BTreeMap;

/// Codes for every leaf of one tree. Immutable once derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeTable {
    codes: BTreeMap<u8, BitString>,
}

impl CodeTable {
    /// Walk the tree depth-first, appending `0` on left edges and `1` on
    /// right edges. A root that is itself a leaf gets the code `0`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();

        if let Some(Node::Leaf { symbol, .. }) = tree.get(tree.root()) {
            codes.insert(*symbol, BitString::from(vec![false]));
            return Self { codes };
        }

        let mut stack = vec![(tree.root(), BitString::new())];
        while let Some((id, path)) = stack.pop() {
            match tree.get(id) {
                Some(Node::Leaf { symbol, .. }) => {
                    codes.insert(*symbol, path);
                }
                Some(Node::Internal { left, right, .. }) => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((*right, right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((*left, left_path));
                }
                None => {}
            }
        }

        Self { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&BitString> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitString)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c))
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(BitString::len).max().unwrap_or(0)
    }

    /// True when every code is non-empty and none is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut sorted: Vec<String> = self.codes.values().map(|c| c.to_string()).collect();
        if sorted.iter().any(String::is_empty) {
            return false;
        }
        sorted.sort();
        // In lexicographic order a prefix always sorts directly before
        // something it prefixes.
        sorted.windows(2).all(|w| !w[1].starts_with(w[0].as_str()))
    }

    /// Total encoded bits for `frequencies` under this table.
    pub fn encoded_len(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|c| c.len() as u64 * count))
            .sum()
    }

    /// Codes as `'0'`/`'1'` text.
    pub fn as_strings(&self) -> BTreeMap<u8, String> {
        self.codes.iter().map(|(&s, c)| (s, c.to_string())).collect()
    }
}
