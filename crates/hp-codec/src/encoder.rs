//! Encoder: count → build → derive → substitute → pack.

use crate::bits::{self, BitString};
use crate::codes::CodeTable;
use crate::decoder;
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;
use hp_core::config::CodecConfig;
use hp_core::error::{HuffError, Result};

/// Everything one encode call produced. The tree is needed to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoded {
    pub packed: Vec<u8>,
    /// Logical bit count before padding.
    pub bit_len: usize,
    pub original_len: usize,
    /// `None` only for empty input.
    pub tree: Option<HuffmanTree>,
    pub codes: CodeTable,
    pub bits: BitString,
    pub frequencies: FrequencyTable,
}

impl Encoded {
    pub fn is_empty(&self) -> bool {
        self.original_len == 0
    }

    /// Packed size over original size; 1.0 for empty input.
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 1.0;
        }
        self.packed.len() as f64 / self.original_len as f64
    }

    /// Zero bits in the final packed byte.
    pub fn padding(&self) -> usize {
        bits::padding_bits(self.bit_len)
    }

    /// Decode this result's own packed bytes with its own tree.
    pub fn decode(&self) -> Result<Vec<u8>> {
        match &self.tree {
            Some(tree) => decoder::decode(tree, &self.packed, Some(self.bit_len)),
            None => Ok(Vec::new()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: CodecConfig,
}

impl Encoder {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Compress `input`. Empty input yields an empty result and no tree.
    pub fn encode(&self, input: &[u8]) -> Result<Encoded> {
        if input.len() > self.config.max_input_len {
            return Err(HuffError::InputTooLarge {
                len: input.len(),
                max: self.config.max_input_len,
            });
        }
        if input.is_empty() {
            tracing::debug!("encode: empty input, no tree built");
            return Ok(Encoded::default());
        }

        let frequencies = FrequencyTable::from_bytes(input);
        let tree = HuffmanTree::build(&frequencies)?;
        let codes = CodeTable::from_tree(&tree);
        let bits = substitute(input, &codes, &frequencies)?;
        let packed = bits::pack(&bits);

        tracing::debug!(
            input_len = input.len(),
            symbols = frequencies.len(),
            bit_len = bits.len(),
            packed_len = packed.len(),
            "encoded"
        );

        Ok(Encoded {
            packed,
            bit_len: bits.len(),
            original_len: input.len(),
            tree: Some(tree),
            codes,
            bits,
            frequencies,
        })
    }
}

/// Concatenate the code of every input symbol, in input order.
pub fn substitute(input: &[u8], codes: &CodeTable, frequencies: &FrequencyTable) -> Result<BitString> {
    let mut out = BitString::with_capacity(codes.encoded_len(frequencies) as usize);
    for &byte in input {
        let code = codes
            .get(byte)
            .ok_or_else(|| HuffError::mismatch(format!("symbol {byte:#04x} has no code")))?;
        out.extend_from(code);
    }
    Ok(out)
}
