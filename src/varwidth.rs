//! Method 2: overflow/continuation code over fixed `b`-bit words.
//!
//! Each value is written as zero or more all-zero escape words, each worth `2^b - 1`,
//! followed by one nonzero word holding the remainder. Values are laid out tail first: the
//! first value ends up at the tail of the bitstring, where the decoder starts reading.

use crate::config::check_word_sizes;
use crate::{BitString, Error, Result};
use std::ops::RangeInclusive;

#[inline(always)]
fn escape_value(word_size: u8) -> u32 {
    (1 << word_size) - 1
}

/// Words needed for `value`: the escapes plus the terminating word.
#[inline(always)]
fn word_count(value: u32, word_size: u8) -> usize {
    let limit = 1u32 << word_size;
    if value < limit {
        1
    } else {
        // each escape takes 2^b - 1 off until the rest fits in a word
        1 + ((value - 1) / escape_value(word_size)) as usize
    }
}

pub(crate) fn encoded_len(values: &[u32], word_size: u8) -> usize {
    values
        .iter()
        .map(|&value| word_count(value, word_size))
        .sum::<usize>()
        * word_size as usize
}

/// Encodes `values` with `word_size`-bit words. A zero value becomes a lone zero word, which
/// a decoder folds into the following value.
pub(crate) fn encode(values: &[u32], word_size: u8) -> BitString {
    let limit = 1u32 << word_size;
    let mut words = Vec::with_capacity(values.len());
    for &value in values {
        let mut value = value;
        while value >= limit {
            words.push(0);
            value -= escape_value(word_size);
        }
        words.push(value);
    }
    trace!("word size {word_size}: words {words:?}");

    // words were collected in decode order, the bitstring holds them front to tail
    let mut bits = BitString::with_capacity(words.len() * word_size as usize);
    for &word in words.iter().rev() {
        bits.push_word(word, word_size);
    }
    bits
}

/// Reads `word_size`-bit words from the tail of `bits` until fewer than a word is left.
/// Trailing escapes with no terminating word are dropped.
pub fn decode(bits: &BitString, word_size: u8) -> Result<Vec<u32>> {
    check_word_sizes(&(word_size..=word_size))?;
    let width = word_size as usize;
    let mut values = vec![];
    let mut value = 0;
    let mut end = bits.len();
    while end >= width {
        end -= width;
        match bits.word_at(end, word_size) {
            0 => value += escape_value(word_size),
            word => {
                values.push(value + word);
                value = 0;
            }
        }
    }
    Ok(values)
}

/// Picks the word size with the shortest encoding. Ties go to the largest word size; the
/// companion decoder was built against streams produced this way.
pub fn select_word_size(values: &[u32], word_sizes: RangeInclusive<u8>) -> Result<(u8, BitString)> {
    check_word_sizes(&word_sizes)?;
    let (start, end) = (*word_sizes.start(), *word_sizes.end());
    let mut best: Option<(u8, usize)> = None;
    for word_size in word_sizes {
        let len = encoded_len(values, word_size);
        trace!("word size {word_size}: {len} bits");
        match best {
            Some((_, best_len)) if len > best_len => {}
            _ => best = Some((word_size, len)),
        }
    }
    let (word_size, len) = best.ok_or(Error::InvalidWordSizes { start, end })?;
    let bits = encode(values, word_size);
    debug_assert_eq!(bits.len(), len);
    Ok((word_size, bits))
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, encoded_len, select_word_size};
    use crate::{BitString, Error};
    use proptest::prelude::*;

    #[test]
    fn test_encode_small_values() {
        crate::setup();
        // first value at the tail
        let bits = encode(&[1, 2, 3], 4);
        assert_eq!(bits.to_string(), "001100100001");
        assert_eq!(decode(&bits, 4).unwrap(), [1, 2, 3]);
    }

    #[test]
    fn test_escape_words() {
        // 16 = 15 + 1, 15 fits, 31 = 15 + 15 + 1
        let bits = encode(&[16], 4);
        assert_eq!(bits.to_string(), "00010000");
        let bits = encode(&[15], 4);
        assert_eq!(bits.to_string(), "1111");
        let bits = encode(&[31], 4);
        assert_eq!(bits.to_string(), "000100000000");
        assert_eq!(decode(&bits, 4).unwrap(), [31]);
    }

    #[test]
    fn test_zero_folds_into_next_value() {
        let bits = encode(&[0, 5], 4);
        assert_eq!(bits.to_string(), "01010000");
        assert_eq!(decode(&bits, 4).unwrap(), [20]);
    }

    #[test]
    fn test_encoded_len_matches_encode() {
        let values = [0, 1, 3, 4, 7, 8, 15, 16, 30, 31, 64, 1000, 3629];
        for word_size in 2..=15 {
            assert_eq!(
                encoded_len(&values, word_size),
                encode(&values, word_size).len(),
                "word size {word_size}"
            );
        }
    }

    #[test]
    fn test_tie_prefers_larger_word_size() {
        crate::setup();
        // 35 bits with both 5 and 7 bit words, every other size is longer
        let values = [1, 1, 1, 1, 64];
        assert_eq!(encoded_len(&values, 5), 35);
        assert_eq!(encoded_len(&values, 7), 35);
        assert_eq!(encoded_len(&values, 6), 36);
        let (word_size, bits) = select_word_size(&values, 2..=15).unwrap();
        assert_eq!(word_size, 7);
        assert_eq!(bits, encode(&values, 7));
    }

    #[test]
    fn test_single_value_prefers_narrow_words() {
        // one word at every size, so the narrowest is strictly shortest
        let (word_size, bits) = select_word_size(&[1], 2..=15).unwrap();
        assert_eq!(word_size, 2);
        assert_eq!(bits.to_string(), "01");
    }

    #[test]
    fn test_many_ties_pick_largest() {
        // nothing to encode costs 0 bits at every size
        let (word_size, bits) = select_word_size(&[], 2..=15).unwrap();
        assert_eq!(word_size, 15);
        assert!(bits.is_empty());
    }

    #[test]
    fn test_invalid_word_sizes() {
        #[allow(clippy::reversed_empty_ranges)]
        let result = select_word_size(&[1], 5..=4);
        assert!(matches!(result, Err(Error::InvalidWordSizes { start: 5, end: 4 })));
        assert!(matches!(
            select_word_size(&[1], 0..=4),
            Err(Error::InvalidWordSizes { start: 0, end: 4 })
        ));
        assert!(matches!(
            select_word_size(&[1], 2..=32),
            Err(Error::InvalidWordSizes { start: 2, end: 32 })
        ));
        let bits: BitString = "0001".parse().unwrap();
        assert!(decode(&bits, 0).is_err());
        assert!(decode(&bits, 40).is_err());
    }

    #[test]
    fn test_decode_ignores_partial_front_word() {
        let bits: BitString = "10011".parse().unwrap();
        assert_eq!(decode(&bits, 4).unwrap(), [3]);
    }

    proptest! {
        #[test]
        fn decode_reverses_encode(
            values in prop::collection::vec(1u32..5000, 0..50),
            word_size in 2u8..=15,
        ) {
            let bits = encode(&values, word_size);
            prop_assert_eq!(bits.len(), encoded_len(&values, word_size));
            prop_assert_eq!(decode(&bits, word_size).unwrap(), values);
        }
    }
}
