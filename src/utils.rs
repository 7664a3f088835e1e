//! Assorted utilities and helpers.
//!
//! These are intentionally minimal; both kernels lean on them in their
//! inner loops and result extraction. [`resident_set_kib`] serves the report
//! driver and the benches.

use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Minimum of three values.
#[inline]
pub fn min3<T: Ord>(a: T, b: T, c: T) -> T {
    a.min(b).min(c)
}

/// Number of aligned positions where `a` and `b` differ.
///
/// Only the common prefix is compared; callers pass equal-length slices.
#[inline]
pub fn count_mismatches(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Resident set size of this process in KiB, or 0 where sysinfo cannot see it.
///
/// `sys` is refreshed in place so repeated samples reuse one handle.
pub fn resident_set_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |process| process.memory() / 1024)
}

#[cfg(test)]
mod tests {
    use super::{count_mismatches, min3, resident_set_kib};
    use sysinfo::System;

    #[test]
    fn min3_picks_smallest_in_any_position() {
        assert_eq!(min3(1, 2, 3), 1);
        assert_eq!(min3(3, 1, 2), 1);
        assert_eq!(min3(2, 3, 1), 1);
        assert_eq!(min3(4, 4, 4), 4);
    }

    #[test]
    fn mismatches_count_differing_positions() {
        assert_eq!(count_mismatches(b"", b""), 0);
        assert_eq!(count_mismatches(b"ABC", b"ABC"), 0);
        assert_eq!(count_mismatches(b"ABCD", b"ABCE"), 1);
        assert_eq!(count_mismatches(b"AAAA", b"BBBB"), 4);
    }

    #[test]
    fn resident_set_samples_agree_on_support() {
        let mut sys = System::new();
        let first = resident_set_kib(&mut sys);
        let block = vec![1u8; 1 << 20];
        let second = resident_set_kib(&mut sys);
        assert_eq!(block.len(), 1 << 20);
        // 0 means unsupported platform.
        assert_eq!(first == 0, second == 0);
        #[cfg(target_os = "linux")]
        assert!(first > 0);
    }
}
