//! Primary artifact: pixel blocks, sentinel words and the hex word list.
//!
//! ```text
//!   front                                                       tail
//!     │                                                          │
//!     ▼                                                          ▼
//!     │ pixel 63 block │ ... │ pixel 1 block │ pixel 0 block │
//!
//!     pixel block:  │ 0 x b │ data words ... │ b - min_word_size │
//!                     ▲                        └── field_size bits
//!                     └─ sentinel, replaces the word of the last wait time
//! ```
//!
//! The stream is sliced into `u64` words from the tail and written as `0x..` literals,
//! followed by a `0` word so a reader can run one word past the end.

use crate::{varwidth, BitString, EncoderConfig, Frame, Result, WireFormat, PIXELS};
use std::io;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBlock {
    pub pixel: usize,
    pub word_size: u8,
    /// position of the block in the assembled bitstring
    pub range: Range<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub bits: BitString,
    /// indexed by pixel
    pub blocks: Vec<PixelBlock>,
}

impl Assembly {
    pub fn words(&self) -> Vec<u64> {
        self.bits.to_words()
    }
}

/// Selects a word size for every timeline and lays the blocks out for the decoder.
///
/// A word size outside the wire format's range is fatal. Without any diffs nothing is
/// assembled, the artifact is just the terminating word.
pub fn assemble(timelines: &[Vec<u32>], config: &EncoderConfig) -> Result<Assembly> {
    config.validate()?;
    let diff_count: u32 = timelines.first().map_or(0, |timeline| timeline.iter().sum());
    if diff_count == 0 {
        debug!("no diffs, nothing to assemble");
        return Ok(Assembly::default());
    }

    let mut selected = Vec::with_capacity(timelines.len());
    for (pixel, timeline) in timelines.iter().enumerate() {
        let (word_size, data) = varwidth::select_word_size(timeline, config.word_sizes.clone())?;
        let field = config.wire.field(pixel, word_size)?;
        debug!(
            "pixel {pixel}: {} waits, word size {word_size}, {} bits",
            timeline.len(),
            data.len()
        );
        selected.push((word_size, field, data));
    }

    let mut bits = BitString::new();
    let mut blocks = Vec::with_capacity(selected.len());
    for (pixel, (word_size, field, data)) in selected.iter().enumerate().rev() {
        let start = bits.len();
        bits.extend(data);
        bits.push_word(*field, config.wire.field_size());
        // the decoder reads this word last for the pixel; zero makes it overshoot and stop
        bits.clear_range(start..bits.len().min(start + *word_size as usize));
        blocks.push(PixelBlock {
            pixel,
            word_size: *word_size,
            range: start..bits.len(),
        });
    }
    blocks.reverse();
    debug!("assembled {} bits, {} words", bits.len(), bits.len().div_ceil(64));
    Ok(Assembly { bits, blocks })
}

/// Writes `0x..` words separated by commas and finishes with the `0` guard word.
pub struct WordWriter<W> {
    writer: W,
    count: usize,
}

impl<W: io::Write> WordWriter<W> {
    pub fn new(writer: W) -> Self {
        WordWriter { writer, count: 0 }
    }

    #[inline(always)]
    pub fn update(&mut self, word: u64) -> io::Result<()> {
        trace!("word {}: {word:#x}", self.count);
        write!(self.writer, "{word:#x},")?;
        self.count += 1;
        Ok(())
    }

    pub fn finalize(mut self) -> io::Result<usize> {
        self.writer.write_all(b"0")?;
        self.writer.flush()?;
        Ok(self.count + 1)
    }
}

/// Writes the word list of `bits`, returns the number of words including the guard.
pub fn write_artifact<W: io::Write>(writer: W, bits: &BitString) -> io::Result<usize> {
    let mut words = WordWriter::new(writer);
    for word in bits.to_words() {
        words.update(word)?;
    }
    words.finalize()
}

/// Reads the word list the way the companion decoder does: bits are taken from the least
/// significant end of word 0 onwards, and reading past the last word yields zeros.
pub struct WordReader<'a> {
    words: &'a [u64],
    bit_index: usize,
}

impl<'a> WordReader<'a> {
    pub fn new(words: &'a [u64]) -> Self {
        WordReader {
            words,
            bit_index: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.bit_index
    }

    pub fn read(&mut self, width: u8) -> u32 {
        debug_assert!(width <= 32);
        let offset = self.bit_index % 64;
        let index = self.bit_index / 64;
        self.bit_index += width as usize;

        let word = |index: usize| self.words.get(index).copied().unwrap_or(0);
        let mut value = word(index) >> offset;
        if offset != 0 {
            value |= word(index + 1) << (64 - offset);
        }
        (value & ((1 << width) - 1)) as u32
    }
}

/// Rebuilds the diffs from an artifact's words, as the companion decoder plays them.
pub fn decode_diffs(words: &[u64], wire: WireFormat, diff_count: usize) -> Vec<Frame> {
    let mut diffs = vec![0; diff_count];
    let mut reader = WordReader::new(words);
    for pixel in 0..PIXELS {
        let word_size = reader.read(wire.field_size()) as u8 + wire.min_word_size();
        let escape = (1usize << word_size) - 1;
        let mut frame = 0;
        while frame < diff_count {
            let next = reader.read(word_size) as usize;
            frame += next;
            if next == 0 {
                frame += escape;
            } else if let Some(diff) = diffs.get_mut(frame) {
                *diff |= 1u64 << pixel;
            }
        }
        trace!("pixel {pixel}: word size {word_size}, at bit {}", reader.position());
    }
    diffs
}
