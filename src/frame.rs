//! Frame sources: thresholding 8x8 grayscale images and the decimal frame cache.

use crate::{Error, Result, FRAME_HEIGHT, FRAME_WIDTH};
use image::{DynamicImage, GrayImage};
use std::io::{self, BufRead};

/// 8x8 monochrome frame, one bit per pixel.
pub type Frame = u64;

/// luminance above this is a lit pixel
pub const LUMA_THRESHOLD: u8 = 127;

/// Bit index of the pixel at column `x`, row `y`. Row 0 lands in the high byte, with column 0
/// at its least significant bit.
#[inline(always)]
pub fn pixel_bit(x: u32, y: u32) -> u32 {
    debug_assert!(x < FRAME_WIDTH && y < FRAME_HEIGHT);
    63 - (y * FRAME_WIDTH + (FRAME_WIDTH - 1 - x))
}

pub fn from_luma(image: &GrayImage) -> Result<Frame> {
    let (width, height) = image.dimensions();
    if width != FRAME_WIDTH || height != FRAME_HEIGHT {
        return Err(Error::ImageSize { width, height });
    }
    let frame = image
        .enumerate_pixels()
        .filter(|(_, _, luma)| luma.0[0] > LUMA_THRESHOLD)
        .fold(0u64, |frame, (x, y, _)| frame | 1 << pixel_bit(x, y));
    trace!("frame from luma: {frame:064b}");
    Ok(frame)
}

pub fn from_image(image: &DynamicImage) -> Result<Frame> {
    from_luma(&image.to_luma8())
}

/// Reads the frame cache: one decimal frame per line, blank lines skipped.
pub fn read_frames<R: BufRead>(reader: R) -> Result<Vec<Frame>> {
    let mut frames = vec![];
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let frame = line.parse::<Frame>().map_err(|source| Error::ParseFrame {
            line: index + 1,
            source,
        })?;
        frames.push(frame);
    }
    debug!("read {} cached frames", frames.len());
    Ok(frames)
}

pub fn write_frames<W: io::Write>(mut writer: W, frames: &[Frame]) -> io::Result<()> {
    for frame in frames {
        writeln!(writer, "{frame}")?;
    }
    writer.flush()
}
