use std::io;
use std::num::ParseIntError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("pixel {pixel} needs word size {word_size}, the wire format only encodes {min}..={max}")]
    WordSizeOutOfRange {
        pixel: usize,
        word_size: u8,
        min: u8,
        max: u8,
    },
    #[error("bitstring has non-binary character {found:?} at position {position}")]
    NonBinary { position: usize, found: char },
    #[error("wire format with minimum word size {min_word_size} and a {field_size}-bit field is not encodable")]
    InvalidWireFormat { min_word_size: u8, field_size: u8 },
    #[error("word size range {start}..={end} is empty or wider than the encoders support")]
    InvalidWordSizes { start: u8, end: u8 },
    #[error("frame cache line {line}: {source}")]
    ParseFrame {
        line: usize,
        #[source]
        source: ParseIntError,
    },
    #[error("frame must be 8x8 pixels, got {width}x{height}")]
    ImageSize { width: u32, height: u32 },
    #[error(transparent)]
    Io(#[from] io::Error),
}
