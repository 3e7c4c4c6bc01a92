//! Method 3: run-length code over each frame in spiral order.
//!
//! ```text
//!    0  1  2  3  4  5  6  7
//!   27 28 29 30 31 32 33  8
//!   26 47 48 49 50 51 34  9
//!   25 46 59 60 61 52 35 10
//!   24 45 58 63 62 53 36 11
//!   23 44 57 56 55 54 37 12
//!   22 43 42 41 40 39 38 13
//!   21 20 19 18 17 16 15 14
//! ```
//!
//! The table maps a bit index to its position on a corner-in spiral, so neighbouring
//! pixels become neighbouring bits. Runs alternate colors starting with the color of the
//! first visited bit, each written as a `b`-bit length; a run reaching `2^b` emits an
//! all-zero word and continues from 1.

use crate::config::check_word_sizes;
use crate::{BitString, Error, Frame, Result, PIXELS};
use std::fmt::{self, Debug};
use std::ops::RangeInclusive;

pub const SPIRAL: [u8; PIXELS] = [
    0, 1, 2, 3, 4, 5, 6, 7, //
    27, 28, 29, 30, 31, 32, 33, 8, //
    26, 47, 48, 49, 50, 51, 34, 9, //
    25, 46, 59, 60, 61, 52, 35, 10, //
    24, 45, 58, 63, 62, 53, 36, 11, //
    23, 44, 57, 56, 55, 54, 37, 12, //
    22, 43, 42, 41, 40, 39, 38, 13, //
    21, 20, 19, 18, 17, 16, 15, 14, //
];

/// Bit index visited at each spiral position.
pub const ORDER: [u8; PIXELS] = {
    let mut order = [0; PIXELS];
    let mut i = 0;
    while i < PIXELS {
        order[SPIRAL[i] as usize] = i as u8;
        i += 1;
    }
    order
};

struct SpiralRle {
    status: RunStatus,
    word_size: u8,
    bits: BitString,
}

#[derive(Copy, Clone)]
enum RunStatus {
    Wait,
    Run { is_one: bool, counter: u32 },
}

impl SpiralRle {
    fn new(word_size: u8) -> Self {
        SpiralRle {
            status: RunStatus::Wait,
            word_size,
            bits: BitString::new(),
        }
    }

    #[inline(always)]
    fn update(&mut self, bit: bool) {
        match self.status {
            RunStatus::Wait => {
                self.status = RunStatus::Run {
                    is_one: bit,
                    counter: 1,
                };
            }
            RunStatus::Run { is_one, counter } if is_one == bit => {
                let mut counter = counter + 1;
                if counter == 1 << self.word_size {
                    trace!("run of {is_one} overflows {} bits", self.word_size);
                    self.bits.push_word(0, self.word_size);
                    counter = 1;
                }
                self.status = RunStatus::Run { is_one, counter };
            }
            RunStatus::Run { is_one, counter } => {
                self.bits.push_word(counter, self.word_size);
                self.status = RunStatus::Run {
                    is_one: !is_one,
                    counter: 1,
                };
            }
        }
        trace!("transit to {:?}", self.status);
    }

    fn finalize(mut self) -> BitString {
        if let RunStatus::Run { counter, .. } = self.status {
            self.bits.push_word(counter, self.word_size);
        }
        self.bits
    }
}

impl Debug for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Run { is_one, counter } => f
                .debug_struct("Run")
                .field("is_one", &is_one)
                .field("counter", &counter)
                .finish(),
            RunStatus::Wait => f.write_str("Wait"),
        }
    }
}

/// Run-length codes `frame` in spiral order with `word_size`-bit words.
pub(crate) fn encode_frame(frame: Frame, word_size: u8) -> BitString {
    let mut rle = SpiralRle::new(word_size);
    for &bit in ORDER.iter() {
        rle.update((frame >> bit) & 1 == 1);
    }
    rle.finalize()
}

/// Shortest spiral code of `frame`, the smallest word size wins ties.
pub fn best_encoding(frame: Frame, word_sizes: RangeInclusive<u8>) -> Result<(u8, BitString)> {
    check_word_sizes(&word_sizes)?;
    let invalid = Error::InvalidWordSizes {
        start: *word_sizes.start(),
        end: *word_sizes.end(),
    };
    word_sizes
        .map(|word_size| (word_size, encode_frame(frame, word_size)))
        .min_by_key(|(_, bits)| bits.len())
        .ok_or(invalid)
}

/// Concatenates the shortest code of every frame.
pub fn encode_frames(frames: &[Frame], word_sizes: RangeInclusive<u8>) -> Result<BitString> {
    check_word_sizes(&word_sizes)?;
    let mut bits = BitString::new();
    for (index, &frame) in frames.iter().enumerate() {
        let (word_size, frame_bits) = best_encoding(frame, word_sizes.clone())?;
        debug!(
            "frame {index}: word size {word_size}, {} bits",
            frame_bits.len()
        );
        bits.extend(&frame_bits);
    }
    Ok(bits)
}
