//! `.huff` container layout (integers little-endian):
//!
//! | field          | size                  |
//! |----------------|-----------------------|
//! | magic `HUF1`   | 4                     |
//! | original_len   | u64                   |
//! | bit_len        | u64                   |
//! | tree_len       | u32                   |
//! | tree           | tree_len              |
//! | payload        | ceil(bit_len / 8)     |
//!
//! Empty input is stored with `tree_len = 0` and no payload.

use hp_codec::{decoder, Encoded, Encoder, HuffmanTree};
use hp_core::config::CodecConfig;
use hp_core::error::{HuffError, Result};
use std::io::Write;

pub const MAGIC: &[u8; 4] = b"HUF1";

/// Fixed-size prefix before the tree bytes.
pub const HEADER_LEN: usize = 4 + 8 + 8 + 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub original_len: u64,
    pub bit_len: u64,
    pub tree: Vec<u8>,
    pub payload: Vec<u8>,
}

impl Container {
    pub fn from_encoded(encoded: &Encoded) -> Self {
        Self {
            original_len: encoded.original_len as u64,
            bit_len: encoded.bit_len as u64,
            tree: encoded.tree.as_ref().map(HuffmanTree::serialize).unwrap_or_default(),
            payload: encoded.packed.clone(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let tree_len = u32::try_from(self.tree.len())
            .map_err(|_| HuffError::InvalidFormat(format!("tree of {} bytes", self.tree.len())))?;

        let mut bytes = Vec::with_capacity(HEADER_LEN + self.tree.len() + self.payload.len());
        bytes.write_all(MAGIC)?;
        bytes.write_all(&self.original_len.to_le_bytes())?;
        bytes.write_all(&self.bit_len.to_le_bytes())?;
        bytes.write_all(&tree_len.to_le_bytes())?;
        bytes.write_all(&self.tree)?;
        bytes.write_all(&self.payload)?;
        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::new(bytes);

        if reader.take(MAGIC.len(), "magic")? != MAGIC {
            return Err(HuffError::InvalidFormat("bad magic".into()));
        }
        let original_len = reader.u64("original length")?;
        let bit_len = reader.u64("bit length")?;
        let tree_len = reader.u32("tree length")? as usize;
        let tree = reader.take(tree_len, "tree")?.to_vec();

        let payload_len = usize::try_from(bit_len.div_ceil(8))
            .map_err(|_| HuffError::InvalidFormat(format!("bit length {bit_len} too large")))?;
        let payload = reader.take(payload_len, "payload")?.to_vec();

        if reader.remaining() > 0 {
            return Err(HuffError::InvalidFormat(format!(
                "{} trailing bytes after payload",
                reader.remaining()
            )));
        }

        Ok(Self { original_len, bit_len, tree, payload })
    }

    /// Rebuild the tree and decode the payload.
    pub fn decode(&self) -> Result<Vec<u8>> {
        if self.tree.is_empty() {
            if self.original_len != 0 || self.bit_len != 0 {
                return Err(HuffError::InvalidFormat("missing tree for non-empty payload".into()));
            }
            return Ok(Vec::new());
        }

        let tree = HuffmanTree::deserialize(&self.tree)?;
        let bit_len = usize::try_from(self.bit_len)
            .map_err(|_| HuffError::InvalidFormat(format!("bit length {} too large", self.bit_len)))?;
        let out = decoder::decode(&tree, &self.payload, Some(bit_len))?;

        if out.len() as u64 != self.original_len {
            return Err(HuffError::mismatch(format!(
                "decoded {} bytes, header says {}",
                out.len(),
                self.original_len
            )));
        }
        Ok(out)
    }
}

/// Encode `input` straight into container bytes.
pub fn compress(input: &[u8], config: &CodecConfig) -> Result<Vec<u8>> {
    let encoded = Encoder::new(config.clone()).encode(input)?;
    Container::from_encoded(&encoded).to_bytes()
}

/// Parse and decode container bytes.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    Container::from_bytes(bytes)?.decode()
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize, what: &str) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(HuffError::InvalidFormat(format!(
                "truncated {what}: need {n} bytes, have {}",
                self.remaining()
            )));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn u64(&mut self, what: &str) -> Result<u64> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.take(8, what)?);
        Ok(u64::from_le_bytes(raw))
    }

    fn u32(&mut self, what: &str) -> Result<u32> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4, what)?);
        Ok(u32::from_le_bytes(raw))
    }
}
