use crate::Frame;

/// XORs every pair of consecutive frames. Fewer than two frames give no diffs.
pub fn diff_frames(frames: &[Frame]) -> Vec<Frame> {
    let diffs: Vec<Frame> = frames.windows(2).map(|pair| pair[0] ^ pair[1]).collect();
    debug!(
        "{} frames, {} diffs, {} pixel changes",
        frames.len(),
        diffs.len(),
        diff_counts(&diffs).iter().sum::<u32>()
    );
    diffs
}

/// Changed pixels per diff.
pub fn diff_counts(diffs: &[Frame]) -> Vec<u32> {
    diffs.iter().map(|diff| diff.count_ones()).collect()
}
