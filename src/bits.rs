use crate::{Error, Result};
use std::fmt::{self, Debug, Display};
use std::ops::Range;
use std::str::FromStr;

/// Ordered bit buffer. Index 0 is the front of the stream, i.e. the most significant bit once
/// the stream is sliced into words; decoders consume it from the tail.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new() -> Self {
        BitString { bits: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        BitString {
            bits: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Appends the low `width` bits of `value`, most significant first.
    #[inline(always)]
    pub fn push_word(&mut self, value: u32, width: u8) {
        debug_assert!(width <= 32);
        debug_assert!(width == 32 || value >> width == 0, "{value} overflows {width} bits");
        for shift in (0..width).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    pub fn extend(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Reads `width` bits starting at `start` as an unsigned integer, most significant first.
    pub fn word_at(&self, start: usize, width: u8) -> u32 {
        self.bits[start..start + width as usize]
            .iter()
            .fold(0, |acc, &bit| (acc << 1) | bit as u32)
    }

    pub fn clear_range(&mut self, range: Range<usize>) {
        self.bits[range].iter_mut().for_each(|bit| *bit = false);
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Slices the stream into 64-bit words starting from the tail. Word 0 holds the last 64
    /// bits; the front word is shorter when the length is not a multiple of 64.
    pub fn to_words(&self) -> Vec<u64> {
        let mut words = Vec::with_capacity(self.bits.len().div_ceil(64));
        let mut end = self.bits.len();
        while end > 0 {
            let start = end.saturating_sub(64);
            let word = self.bits[start..end]
                .iter()
                .fold(0u64, |acc, &bit| (acc << 1) | bit as u64);
            trace!("word {}: bits {start}..{end} = {word:#018x}", words.len());
            words.push(word);
            end = start;
        }
        words
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        BitString {
            bits: iter.into_iter().collect(),
        }
    }
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, found)| match found {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::NonBinary { position, found }),
            })
            .collect()
    }
}

impl Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitString")
            .field("len", &self.bits.len())
            .field("bits", &format_args!("{self}"))
            .finish()
    }
}
