//! Unit conversions and formatting shared by the metric readers.

use crate::metrics::data::{DiskUsage, MemoryUsage};

/// Bytes in one GiB.
pub const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Round `value` to `digits` decimal places, halves away from zero.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Convert a byte count to GiB rounded to `digits` decimals.
pub fn bytes_to_gib(bytes: u64, digits: i32) -> f64 {
    round_to(bytes as f64 / BYTES_PER_GIB, digits)
}

/// `part / total` as a percentage rounded to `digits` decimals.
///
/// Callers must ensure `total` is non-zero.
pub fn percent(part: u64, total: u64, digits: i32) -> f64 {
    round_to(part as f64 / total as f64 * 100.0, digits)
}

/// Format seconds as `"{d}d {h}h {m}m"`, dropping the day part when zero.
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / SECONDS_PER_DAY;
    let hours = (seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}

impl MemoryUsage {
    /// Build memory usage from total and available byte counts.
    ///
    /// Returns `None` when `total` is zero or `available` exceeds it.
    pub fn from_bytes(total: u64, available: u64) -> Option<Self> {
        if total == 0 || available > total {
            return None;
        }
        let used = total - available;

        Some(Self {
            total_gb: bytes_to_gib(total, 2),
            used_gb: bytes_to_gib(used, 2),
            used_pct: percent(used, total, 1),
        })
    }
}

impl DiskUsage {
    /// Build disk usage from total and used byte counts.
    ///
    /// Returns `None` when `total` is zero or `used` exceeds it.
    pub fn from_bytes(total: u64, used: u64) -> Option<Self> {
        if total == 0 || used > total {
            return None;
        }

        Some(Self {
            used_gb: bytes_to_gib(used, 1),
            total_gb: bytes_to_gib(total, 1),
            used_pct: percent(used, total, 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIB: u64 = 1024 * 1024 * 1024;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.234, 2), 1.23);
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(47.2345, 1), 47.2);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn test_bytes_to_gib_and_percent() {
        assert_eq!(bytes_to_gib(GIB, 1), 1.0);
        assert_eq!(bytes_to_gib(GIB / 2, 2), 0.5);
        assert_eq!(percent(1, 4, 1), 25.0);
    }

    #[test]
    fn test_uptime_with_days() {
        assert_eq!(format_uptime(90_000), "1d 1h 0m");
        assert_eq!(format_uptime(2 * 86_400 + 5 * 3_600 + 10 * 60), "2d 5h 10m");
    }

    #[test]
    fn test_uptime_without_days() {
        assert_eq!(format_uptime(3_600), "1h 0m");
        assert_eq!(format_uptime(3 * 3_600 + 25 * 60 + 59), "3h 25m");
        assert_eq!(format_uptime(0), "0h 0m");
    }

    #[test]
    fn test_disk_usage_rounding() {
        let total = 100 * GIB;
        let used = (33.333 * GIB as f64) as u64;

        let disk = DiskUsage::from_bytes(total, used).unwrap();
        assert_eq!(disk.used_pct, 33.3);
        assert_eq!(disk.used_gb, 33.3);
        assert_eq!(disk.total_gb, 100.0);
    }

    #[test]
    fn test_disk_usage_rejects_zero_total() {
        assert!(DiskUsage::from_bytes(0, 0).is_none());
        assert!(DiskUsage::from_bytes(10, 11).is_none());
    }

    #[test]
    fn test_memory_usage_half_used() {
        let mem = MemoryUsage::from_bytes(1_048_576 * 1024, 524_288 * 1024).unwrap();
        assert_eq!(mem.used_pct, 50.0);
        assert_eq!(mem.total_gb, 1.0);
        assert_eq!(mem.used_gb, 0.5);
    }

    #[test]
    fn test_memory_percent_stays_in_range() {
        let total = 8 * GIB;
        for available in [0, 1, GIB / 3, GIB, 4 * GIB, 8 * GIB - 1, 8 * GIB] {
            let mem = MemoryUsage::from_bytes(total, available).unwrap();
            let expected = round_to((total - available) as f64 / total as f64 * 100.0, 1);
            assert_eq!(mem.used_pct, expected);
            assert!((0.0..=100.0).contains(&mem.used_pct));
        }
    }

    #[test]
    fn test_memory_usage_rejects_inconsistent_values() {
        assert!(MemoryUsage::from_bytes(0, 0).is_none());
        assert!(MemoryUsage::from_bytes(1024, 2048).is_none());
    }
}
