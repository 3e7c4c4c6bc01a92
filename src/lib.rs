//! # Pixel Timeline Encoding Scheme
//!
//! A frame is an 8x8 monochrome image packed into a `u64`:
//!
//! ```text
//!          x=0            x=7
//!           │              │
//!           ▼              ▼
//!   y=0 ─▶ bit 56 ... bit 63
//!   ...
//!   y=7 ─▶ bit 0  ... bit 7
//! ```
//!
//! Consecutive frames are XORed into diffs. For every pixel the diffs become a list of wait
//! times (frames between two color flips), which is written with a per-pixel word size `b`:
//!
//! ```text
//!         front                                              tail
//!           │                                                  │
//!           ▼                                                  ▼
//!   ... │ 0000 │ w[n-2] │ ... │ w[1] │ w[0] │ b - 4 │ ... pixel 0 block │
//!       └──────────────── pixel 1 block ───────────┘
//! ```
//!
//! A decoder reads from the tail: 3 bits of word size, then `b`-bit words. An all-zero word
//! adds `2^b - 1` and keeps accumulating; a nonzero word adds its value and marks a flip.
//! The front word of every block is forced to zero so the decoder always overshoots the
//! frame count there and moves on to the next pixel.
//!
//! The bitstream is sliced into `u64` words from the tail, so word 0 holds the last 64 bits.
//! A trailing zero word lets the decoder read past the end.
//!
//! Two other encoders are kept for comparison: plain run detection on diffs and a spiral
//! ordered run-length code per frame. See [`Method`].

#[macro_use]
extern crate log;

mod bits;
mod config;
mod diff;
pub mod dump;
mod error;
pub mod frame;
mod method;
pub mod run;
pub mod spiral;
pub mod timeline;
pub mod varwidth;
pub mod wire;

pub use bits::BitString;
pub use config::{EncoderConfig, WireFormat};
pub use diff::{diff_counts, diff_frames};
pub use error::{Error, Result};
pub use frame::Frame;
pub use method::{Encoding, Method};
pub use run::Run;

/// pixels in a frame
pub const PIXELS: usize = 64;
pub const FRAME_WIDTH: u32 = 8;
pub const FRAME_HEIGHT: u32 = 8;

/// smallest word size the wire format can describe
pub const MIN_WORD_SIZE: u8 = 4;
/// bits of the per-block word size field, `b - MIN_WORD_SIZE` is stored
pub const WORD_SIZE_FIELD_BITS: u8 = 3;
/// widest word any encoder will write, keeps `2^b` inside a `u32`
pub const MAX_WORD_SIZE: u8 = 31;

/// candidates searched per pixel
pub const PIXEL_WORD_SIZES: (u8, u8) = (2, 15);
/// candidates searched per frame by the spiral encoder
pub const SPIRAL_WORD_SIZES: (u8, u8) = (2, 7);

/// longest run recorded by the run finder, fits in 4 bits
pub const MAX_RUN_LENGTH: u32 = 15;
const RUN_START_BITS: u8 = 6;
const RUN_LENGTH_BITS: u8 = 4;

#[cfg(test)]
fn setup() {
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        pretty_env_logger::init();
    });
}
