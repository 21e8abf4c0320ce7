//! Logical bit strings and the MSB-first byte packer.

use bitvec::prelude::*;
use hp_core::error::{HuffError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of bits, shown as `'0'`/`'1'` text. Stored eight
/// bits per byte, most significant bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: BitVec<u8, Msb0>,
}

impl BitString {
    pub fn new() -> Self {
        Self { bits: BitVec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { bits: BitVec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_bitslice(&other.bits);
    }

    pub fn starts_with(&self, prefix: &BitString) -> bool {
        self.bits.starts_with(&prefix.bits)
    }

    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    /// Backing bytes. Bits past `len()` in the last byte are unspecified;
    /// use [`pack`] for a zero-filled tail.
    pub fn as_raw_slice(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }
}

impl From<BitVec<u8, Msb0>> for BitString {
    fn from(bits: BitVec<u8, Msb0>) -> Self {
        Self { bits }
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        bits.into_iter().collect()
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self { bits: iter.into_iter().collect() }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.iter().map(|b| if b { '1' } else { '0' }).collect();
        f.write_str(&text)
    }
}

impl FromStr for BitString {
    type Err = HuffError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(i, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(HuffError::InvalidFormat(format!(
                    "bit string has {other:?} at position {i}"
                ))),
            })
            .collect()
    }
}

impl Serialize for BitString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Zero bits appended to fill the final byte of `bit_len` bits.
pub fn padding_bits(bit_len: usize) -> usize {
    (8 - bit_len % 8) % 8
}

/// Number of bytes needed to hold `bit_len` bits.
pub fn packed_len(bit_len: usize) -> usize {
    bit_len.div_ceil(8)
}

/// Pack bits MSB-first; the tail of the last byte is zero-filled.
pub fn pack(bits: &BitString) -> Vec<u8> {
    let mut out = vec![0u8; packed_len(bits.len())];
    out.view_bits_mut::<Msb0>()[..bits.len()].copy_from_bitslice(&bits.bits);
    out
}

/// Borrow packed bytes as bits without copying, padding included.
pub fn view(bytes: &[u8]) -> &BitSlice<u8, Msb0> {
    bytes.view_bits::<Msb0>()
}

/// Unpack every bit of every byte, padding included.
pub fn unpack(bytes: &[u8]) -> BitString {
    BitString { bits: view(bytes).to_bitvec() }
}
