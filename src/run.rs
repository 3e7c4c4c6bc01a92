//! Method 1: contiguous runs of changed pixels inside one diff.

use crate::{BitString, Frame, MAX_RUN_LENGTH, RUN_LENGTH_BITS, RUN_START_BITS};
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Run {
    pub start: u32,
    pub length: u32,
}

impl Run {
    pub fn mask(&self) -> Frame {
        (((1u128 << self.length) - 1) << self.start) as Frame
    }
}

impl fmt::Debug for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.length)
    }
}

/// First run of set bits, grown upwards from the lowest set bit. Runs stop at bit 63 and
/// at [`MAX_RUN_LENGTH`], a longer physical run is left for the next call.
pub fn first_run(mask: Frame) -> Option<Run> {
    if mask == 0 {
        return None;
    }
    let start = mask.trailing_zeros();
    let mut length = 1;
    while length < MAX_RUN_LENGTH && start + length < 64 && mask & (1 << (start + length)) != 0 {
        length += 1;
    }
    Some(Run { start, length })
}

/// All runs of `mask`, lowest first. Together they cover every set bit exactly once.
pub fn find_runs(mut mask: Frame) -> Vec<Run> {
    let mut runs = vec![];
    while let Some(run) = first_run(mask) {
        trace!("run {run:?} in {mask:064b}");
        mask ^= run.mask();
        runs.push(run);
    }
    runs
}

/// Packs every run of every diff as a 6-bit start and a 4-bit length.
pub fn encode_runs(diffs: &[Frame]) -> BitString {
    let runs: Vec<Run> = diffs.iter().flat_map(|&diff| find_runs(diff)).collect();
    debug!("{} runs over {} diffs", runs.len(), diffs.len());
    let mut bits =
        BitString::with_capacity(runs.len() * (RUN_START_BITS + RUN_LENGTH_BITS) as usize);
    for run in runs {
        bits.push_word(run.start, RUN_START_BITS);
        bits.push_word(run.length, RUN_LENGTH_BITS);
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::{encode_runs, find_runs, first_run, Run};
    use proptest::prelude::*;

    fn run(start: u32, length: u32) -> Run {
        Run { start, length }
    }

    #[test]
    fn test_empty_mask() {
        assert_eq!(first_run(0), None);
        assert!(find_runs(0).is_empty());
    }

    #[test]
    fn test_runs_lowest_first() {
        crate::setup();
        let mask = 0b1110_0000_0110_1000;
        assert_eq!(find_runs(mask), [run(3, 1), run(5, 2), run(13, 3)]);
    }

    #[test]
    fn test_long_run_is_split() {
        let mask = ((1u64 << 20) - 1) << 7;
        assert_eq!(find_runs(mask), [run(7, 15), run(22, 5)]);
    }

    #[test]
    fn test_full_mask() {
        assert_eq!(
            find_runs(u64::MAX),
            [run(0, 15), run(15, 15), run(30, 15), run(45, 15), run(60, 4)]
        );
    }

    #[test]
    fn test_top_bit() {
        assert_eq!(find_runs(1 << 63), [run(63, 1)]);
        assert_eq!(run(63, 1).mask(), 1 << 63);
        assert_eq!(run(49, 15).mask(), 0x7fff << 49);
    }

    #[test]
    fn test_encode_runs() {
        let bits = encode_runs(&[0, 0b110, 1 << 63]);
        assert_eq!(bits.len(), 20);
        assert_eq!(bits.to_string(), "00000100101111110001");
    }

    proptest! {
        #[test]
        fn runs_cover_mask_exactly_once(mask in any::<u64>()) {
            let mut covered = 0u64;
            for run in find_runs(mask) {
                prop_assert!((1..=15).contains(&run.length));
                prop_assert_eq!(covered & run.mask(), 0);
                covered |= run.mask();
            }
            prop_assert_eq!(covered, mask);
        }
    }
}
