use crate::{
    Error, Result, MAX_WORD_SIZE, MIN_WORD_SIZE, PIXEL_WORD_SIZES, SPIRAL_WORD_SIZES,
    WORD_SIZE_FIELD_BITS,
};
use std::ops::RangeInclusive;

/// Layout of the per-block word size field. The external decoder hardcodes both values, so a
/// block can only use word sizes `min_word_size..=min_word_size + 2^field_size - 1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WireFormat {
    min_word_size: u8,
    field_size: u8,
}

impl WireFormat {
    pub fn new(min_word_size: u8, field_size: u8) -> Result<Self> {
        let invalid = Error::InvalidWireFormat {
            min_word_size,
            field_size,
        };
        if min_word_size == 0 || field_size == 0 || field_size > 5 {
            return Err(invalid);
        }
        let max = min_word_size as u32 + (1 << field_size) - 1;
        if max > MAX_WORD_SIZE as u32 {
            return Err(invalid);
        }
        Ok(WireFormat {
            min_word_size,
            field_size,
        })
    }

    pub fn min_word_size(&self) -> u8 {
        self.min_word_size
    }

    pub fn field_size(&self) -> u8 {
        self.field_size
    }

    pub fn max_word_size(&self) -> u8 {
        self.min_word_size + ((1u8 << self.field_size) - 1)
    }

    pub fn word_sizes(&self) -> RangeInclusive<u8> {
        self.min_word_size..=self.max_word_size()
    }

    /// Value stored in the word size field of `pixel`'s block.
    pub fn field(&self, pixel: usize, word_size: u8) -> Result<u32> {
        if !self.word_sizes().contains(&word_size) {
            return Err(Error::WordSizeOutOfRange {
                pixel,
                word_size,
                min: self.min_word_size,
                max: self.max_word_size(),
            });
        }
        Ok((word_size - self.min_word_size) as u32)
    }
}

impl Default for WireFormat {
    fn default() -> Self {
        WireFormat {
            min_word_size: MIN_WORD_SIZE,
            field_size: WORD_SIZE_FIELD_BITS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    pub wire: WireFormat,
    /// searched per pixel by the timeline encoder
    pub word_sizes: RangeInclusive<u8>,
    /// searched per frame by the spiral encoder
    pub spiral_word_sizes: RangeInclusive<u8>,
}

/// Word sizes the encoders can run with: non-empty, at least 1 and at most [`MAX_WORD_SIZE`].
pub(crate) fn check_word_sizes(range: &RangeInclusive<u8>) -> Result<()> {
    let (start, end) = (*range.start(), *range.end());
    if range.is_empty() || start == 0 || end > MAX_WORD_SIZE {
        return Err(Error::InvalidWordSizes { start, end });
    }
    Ok(())
}

impl EncoderConfig {
    pub fn validate(&self) -> Result<()> {
        check_word_sizes(&self.word_sizes)?;
        check_word_sizes(&self.spiral_word_sizes)
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            wire: WireFormat::default(),
            word_sizes: PIXEL_WORD_SIZES.0..=PIXEL_WORD_SIZES.1,
            spiral_word_sizes: SPIRAL_WORD_SIZES.0..=SPIRAL_WORD_SIZES.1,
        }
    }
}
