//! Stateful codec: each encode replaces the retained tree that the next
//! decode uses.

use crate::decoder;
use crate::encoder::{Encoded, Encoder};
use crate::tree::HuffmanTree;
use hp_core::config::CodecConfig;
use hp_core::error::{HuffError, Result};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec {
    encoder: Encoder,
    last: Option<Encoded>,
}

impl HuffmanCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self {
            encoder: Encoder::new(config),
            last: None,
        }
    }

    /// Compress `input` and retain its tree for [`HuffmanCodec::decode`].
    /// A failed encode clears any previously retained tree.
    pub fn encode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.last = None;
        let encoded = self.encoder.encode(input)?;
        let packed = encoded.packed.clone();
        self.last = Some(encoded);
        Ok(packed)
    }

    /// Decode bytes produced by the most recent [`HuffmanCodec::encode`].
    pub fn decode(&self, packed: &[u8]) -> Result<Vec<u8>> {
        let last = self
            .last
            .as_ref()
            .ok_or_else(|| HuffError::mismatch("decode called before any encode"))?;

        let Some(tree) = &last.tree else {
            if packed.is_empty() {
                return Ok(Vec::new());
            }
            return Err(HuffError::mismatch(format!(
                "last encode was empty but got {} packed bytes",
                packed.len()
            )));
        };

        if packed.len() != last.packed.len() {
            return Err(HuffError::mismatch(format!(
                "expected {} packed bytes from the last encode, got {}",
                last.packed.len(),
                packed.len()
            )));
        }

        decoder::decode(tree, packed, Some(last.bit_len))
    }

    /// Pre-packing bits of the last encode as `'0'`/`'1'` text.
    pub fn encoded_bit_string(&self) -> String {
        self.last.as_ref().map(|e| e.bits.to_string()).unwrap_or_default()
    }

    /// Codes of the last encode as `'0'`/`'1'` text.
    pub fn code_table(&self) -> BTreeMap<u8, String> {
        self.last.as_ref().map(|e| e.codes.as_strings()).unwrap_or_default()
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.last.as_ref().and_then(|e| e.tree.as_ref())
    }

    pub fn last(&self) -> Option<&Encoded> {
        self.last.as_ref()
    }

    /// Drop the retained tree and tables.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
