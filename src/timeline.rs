//! Per-pixel wait times between color flips.

use crate::{Frame, PIXELS};

/// Wait times of `pixel`: starts at `[0]`, a clear diff bit extends the last wait and a set
/// bit starts a new one at 1. The waits always sum to `diffs.len()`.
pub fn pixel_timeline(diffs: &[Frame], pixel: usize) -> Vec<u32> {
    debug_assert!(pixel < PIXELS);
    let mask: Frame = 1 << pixel;
    let mut timeline = vec![0];
    for diff in diffs {
        if diff & mask == 0 {
            if let Some(last) = timeline.last_mut() {
                *last += 1;
            }
        } else {
            timeline.push(1);
        }
    }
    timeline
}

/// Timelines of all pixels, indexed by bit.
pub fn pixel_timelines(diffs: &[Frame]) -> Vec<Vec<u32>> {
    (0..PIXELS)
        .map(|pixel| pixel_timeline(diffs, pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{pixel_timeline, pixel_timelines};
    use crate::diff_frames;
    use proptest::prelude::*;

    #[test]
    fn test_timeline() {
        let diffs = [0b10, 0b00, 0b11, 0b01, 0b00];
        assert_eq!(pixel_timeline(&diffs, 0), [2, 1, 2]);
        assert_eq!(pixel_timeline(&diffs, 1), [0, 2, 3]);
        assert_eq!(pixel_timeline(&diffs, 2), [5]);
    }

    #[test]
    fn test_no_diffs() {
        let timelines = pixel_timelines(&[]);
        assert_eq!(timelines.len(), 64);
        assert!(timelines.iter().all(|timeline| timeline == &[0]));
    }

    #[test]
    fn test_single_pixel_change() {
        let diffs = diff_frames(&[0, 1 << 17]);
        let timelines = pixel_timelines(&diffs);
        for (pixel, timeline) in timelines.iter().enumerate() {
            if pixel == 17 {
                assert_eq!(timeline, &[0, 1]);
            } else {
                assert_eq!(timeline, &[1]);
            }
        }
    }

    proptest! {
        #[test]
        fn waits_sum_to_diff_count(diffs in prop::collection::vec(any::<u64>(), 0..200)) {
            for timeline in pixel_timelines(&diffs) {
                prop_assert_eq!(timeline.iter().sum::<u32>() as usize, diffs.len());
            }
        }
    }
}
