use crate::timeline::pixel_timelines;
use crate::{diff_frames, run, spiral, wire, BitString, EncoderConfig, Frame, Result};

/// The three ways of packing a frame sequence. Only [`Method::PixelTimeline`] produces the
/// artifact the decoder understands; the others are kept to compare sizes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    /// runs of changed pixels per diff
    Runs,
    /// per-pixel wait times with per-pixel word sizes
    PixelTimeline,
    /// spiral ordered run lengths per frame
    Spiral,
}

#[derive(Debug, Clone)]
pub struct Encoding {
    pub method: Method,
    pub bits: BitString,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Runs, Method::PixelTimeline, Method::Spiral];

    pub fn encode(self, frames: &[Frame], config: &EncoderConfig) -> Result<Encoding> {
        config.validate()?;
        let bits = match self {
            Method::Runs => run::encode_runs(&diff_frames(frames)),
            Method::PixelTimeline => {
                let timelines = pixel_timelines(&diff_frames(frames));
                wire::assemble(&timelines, config)?.bits
            }
            Method::Spiral => spiral::encode_frames(frames, config.spiral_word_sizes.clone())?,
        };
        info!("{self:?}: {} bits over {} frames", bits.len(), frames.len());
        Ok(Encoding { method: self, bits })
    }
}

impl Encoding {
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Whole 64-bit words the encoding fills, the unit the methods are compared in.
    pub fn tokens(&self) -> usize {
        self.bits.len() / 64
    }

    pub fn words(&self) -> Vec<u64> {
        self.bits.to_words()
    }
}
