//! Growable bit sequence.
//!
//! Bits are packed MSB-first: bit `i` lives in byte `i / 8` at position
//! `7 - i % 8`. Unused trailing bits of the last byte are always zero, so two
//! sequences with the same bits compare equal.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct BitSequence {
    bytes: Vec<u8>,
    len: usize,
}

impl BitSequence {
    pub fn new() -> Self {
        BitSequence {
            bytes: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(bits: usize) -> Self {
        BitSequence {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Take `len` bits from packed `bytes`. Extra trailing bits are cleared.
    pub fn from_bytes(mut bytes: Vec<u8>, len: usize) -> Result<Self> {
        let capacity = bytes.len() * 8;
        if len > capacity {
            return Err(Error::InvalidBitLength { len, capacity });
        }
        bytes.truncate(len.div_ceil(8));
        if len % 8 != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xff << (8 - len % 8);
            }
        }
        Ok(BitSequence { bytes, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed bytes, the last one zero-padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (1 << (7 - index % 8)) != 0)
    }

    pub fn push(&mut self, bit: bool) {
        let byte_index = self.len / 8;
        let bit_offset = self.len % 8;

        if byte_index >= self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 1 << (7 - bit_offset);
        }
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<bool> {
        if self.len == 0 {
            return None;
        }
        let bit = self.get(self.len - 1);
        self.len -= 1;
        let byte_index = self.len / 8;
        let bit_offset = self.len % 8;
        if bit_offset == 0 {
            self.bytes.pop();
        } else {
            self.bytes[byte_index] &= !(1 << (7 - bit_offset));
        }
        bit
    }

    /// Append every bit of `other`.
    pub fn append(&mut self, other: &BitSequence) {
        if self.len % 8 == 0 {
            // Byte aligned: the packed bytes can be copied as is.
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
        } else {
            other.iter().for_each(|bit| self.push(bit));
        }
    }

    /// True if `prefix` is a prefix of `self`.
    pub fn starts_with(&self, prefix: &BitSequence) -> bool {
        prefix.len <= self.len && prefix.iter().zip(self.iter()).all(|(a, b)| a == b)
    }

    pub fn iter(&self) -> Bits<'_> {
        Bits {
            sequence: self,
            pos: 0,
        }
    }
}

/// Iterator over the bits of a [`BitSequence`], first bit first.
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    sequence: &'a BitSequence,
    pos: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let bit = self.sequence.get(self.pos)?;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitSequence::new();
        bits.extend(iter);
        bits
    }
}

impl Extend<bool> for BitSequence {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl FromStr for BitSequence {
    type Err = Error;

    /// Parse a string of `0` and `1` characters.
    fn from_str(s: &str) -> Result<Self> {
        let mut bits = BitSequence::with_capacity(s.len());
        for (position, found) in s.chars().enumerate() {
            match found {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(Error::InvalidBit { found, position }),
            }
        }
        Ok(bits)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitSequence(\"{}\")", self)
    }
}
