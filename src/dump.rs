//! Plain text dumps of the intermediate data, one line per diff or pixel.

use crate::{diff_counts, run::find_runs, Frame};
use std::io;

/// Changed pixels per diff.
pub fn write_diff_counts<W: io::Write>(mut writer: W, diffs: &[Frame]) -> io::Result<()> {
    for count in diff_counts(diffs) {
        writeln!(writer, "{count}")?;
    }
    writer.flush()
}

/// Runs of every diff as `[(start, length), ...]`.
pub fn write_runs<W: io::Write>(mut writer: W, diffs: &[Frame]) -> io::Result<()> {
    for &diff in diffs {
        writeln!(writer, "{:?}", find_runs(diff))?;
    }
    writer.flush()
}

/// Wait times of every pixel, space separated.
pub fn write_timelines<W: io::Write>(mut writer: W, timelines: &[Vec<u32>]) -> io::Result<()> {
    for timeline in timelines {
        let line: Vec<String> = timeline.iter().map(u32::to_string).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::{write_diff_counts, write_runs, write_timelines};
    use crate::timeline::pixel_timelines;

    const DIFFS: [u64; 3] = [0b0110_0001, 0, 1 << 63];

    fn dump(write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut out = vec![];
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_diff_counts() {
        assert_eq!(dump(|out| write_diff_counts(out, &DIFFS)), "3\n0\n1\n");
    }

    #[test]
    fn test_runs() {
        assert_eq!(
            dump(|out| write_runs(out, &DIFFS)),
            "[(0, 1), (5, 2)]\n[]\n[(63, 1)]\n"
        );
    }

    #[test]
    fn test_timelines() {
        let timelines = pixel_timelines(&DIFFS);
        let text = dump(|out| write_timelines(out, &timelines));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 64);
        assert_eq!(lines[0], "0 3");
        assert_eq!(lines[1], "3");
        assert_eq!(lines[5], "0 3");
        assert_eq!(lines[63], "2 1");
    }
}
