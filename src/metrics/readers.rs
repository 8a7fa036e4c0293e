//! Metric readers.
//!
//! Each reader consults exactly one OS data source. The `parse_*` functions
//! are pure and report why a source is unusable; the `read_*` functions do
//! the I/O and collapse any failure into `None` so that one missing sensor
//! only blanks its own field.

use crate::error::{Result, StatusError};
use crate::metrics::data::{DiskUsage, MemoryUsage};
use crate::metrics::units::{format_uptime, round_to};
use std::fs;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::path::Path;
use sysinfo::System;
use tracing::debug;

/// Hostname reported when the OS does not provide one.
pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// Parse a thermal zone reading (millidegrees) into Celsius, one decimal.
pub fn parse_cpu_temp(raw: &str) -> Result<f64> {
    let millidegrees: i64 = raw
        .trim()
        .parse()
        .map_err(|e| StatusError::parse_error(format!("thermal reading {:?}: {}", raw.trim(), e)))?;

    Ok(round_to(millidegrees as f64 / 1000.0, 1))
}

/// Look up a `Key:   123 kB` line in meminfo and return its value in bytes.
pub fn meminfo_bytes(meminfo: &str, key: &str) -> Result<u64> {
    let line = meminfo
        .lines()
        .find(|line| {
            line.strip_prefix(key)
                .is_some_and(|rest| rest.starts_with(':'))
        })
        .ok_or_else(|| StatusError::missing_field(key))?;

    let kib: u64 = line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| StatusError::parse_error(format!("{} has no value", key)))?
        .parse()
        .map_err(|e| StatusError::parse_error(format!("{}: {}", key, e)))?;

    kib.checked_mul(1024)
        .ok_or_else(|| StatusError::parse_error(format!("{} overflows", key)))
}

/// Parse meminfo text into memory usage.
pub fn parse_meminfo(meminfo: &str) -> Result<MemoryUsage> {
    let total = meminfo_bytes(meminfo, "MemTotal")?;
    let available = meminfo_bytes(meminfo, "MemAvailable")?;

    MemoryUsage::from_bytes(total, available).ok_or_else(|| {
        StatusError::parse_error(format!(
            "inconsistent memory values: total={} available={}",
            total, available
        ))
    })
}

/// Parse `/proc/uptime` text into a human readable duration.
pub fn parse_uptime(raw: &str) -> Result<String> {
    let first = raw
        .split_whitespace()
        .next()
        .ok_or_else(|| StatusError::missing_field("uptime seconds"))?;
    let seconds: f64 = first
        .parse()
        .map_err(|e| StatusError::parse_error(format!("uptime {:?}: {}", first, e)))?;

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(StatusError::parse_error(format!("uptime out of range: {}", seconds)));
    }

    Ok(format_uptime(seconds as u64))
}

/// Read the CPU temperature in Celsius.
pub fn read_cpu_temp(path: &Path) -> Option<f64> {
    read_source("cpu_temp_c", path, parse_cpu_temp)
}

/// Read memory usage.
pub fn read_memory(path: &Path) -> Option<MemoryUsage> {
    read_source("mem", path, parse_meminfo)
}

/// Read system uptime.
pub fn read_uptime(path: &Path) -> Option<String> {
    read_source("uptime", path, parse_uptime)
}

/// Disk usage from filesystem block counts.
///
/// Used space is everything not free, reserved blocks included, which is
/// what `df` reports in its "Used" column.
pub fn disk_usage_from_blocks(blocks: u64, blocks_free: u64, fragment_size: u64) -> Result<DiskUsage> {
    let total = blocks
        .checked_mul(fragment_size)
        .ok_or_else(|| StatusError::parse_error("filesystem size overflows"))?;
    let used = blocks.saturating_sub(blocks_free) * fragment_size;

    DiskUsage::from_bytes(total, used)
        .ok_or_else(|| StatusError::parse_error("filesystem reports zero size"))
}

/// Read usage of the filesystem holding `root`.
#[cfg(unix)]
pub fn read_disk_usage(root: &Path) -> Option<DiskUsage> {
    let outcome = nix::sys::statvfs::statvfs(root)
        .map_err(|e| StatusError::unavailable(format!("statvfs {}: {}", root.display(), e)))
        .and_then(|stat| {
            disk_usage_from_blocks(
                stat.blocks() as u64,
                stat.blocks_free() as u64,
                stat.fragment_size() as u64,
            )
        });

    unavailable_as_none("disk", outcome)
}

/// Read usage of the filesystem mounted at `root`.
#[cfg(not(unix))]
pub fn read_disk_usage(root: &Path) -> Option<DiskUsage> {
    let disks = sysinfo::Disks::new_with_refreshed_list();

    let outcome = disks
        .list()
        .iter()
        .find(|disk| disk.mount_point() == root)
        .ok_or_else(|| {
            StatusError::unavailable(format!("no filesystem mounted at {}", root.display()))
        })
        .and_then(|disk| {
            let total = disk.total_space();
            let used = total.saturating_sub(disk.available_space());
            DiskUsage::from_bytes(total, used)
                .ok_or_else(|| StatusError::parse_error("filesystem reports zero size"))
        });

    unavailable_as_none("disk", outcome)
}

/// Read the one-minute load average, two decimals.
#[cfg(unix)]
pub fn read_load1() -> Option<f64> {
    Some(round_to(System::load_average().one, 2))
}

/// Read the one-minute load average, two decimals.
#[cfg(not(unix))]
pub fn read_load1() -> Option<f64> {
    unavailable_as_none(
        "load1",
        Err(StatusError::unavailable("no load average on this platform")),
    )
}

/// Read the system hostname.
pub fn read_hostname() -> String {
    System::host_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string())
}

/// Find the local address the OS would use to reach `probe`.
///
/// The socket is connectionless, so no packet is sent.
pub fn read_local_ip(probe: SocketAddr) -> Option<String> {
    unavailable_as_none("ip", probe_local_ip(probe).map(|ip| ip.to_string()))
}

fn probe_local_ip(probe: SocketAddr) -> Result<IpAddr> {
    let bind_addr: SocketAddr = match probe {
        SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
        SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
    };

    let socket = UdpSocket::bind(bind_addr)?;
    socket.connect(probe)?;
    let ip = socket.local_addr()?.ip();

    if ip.is_unspecified() {
        return Err(StatusError::unavailable("no route to probe address"));
    }
    Ok(ip)
}

fn read_source<T>(metric: &str, path: &Path, parse: impl FnOnce(&str) -> Result<T>) -> Option<T> {
    let outcome = fs::read_to_string(path)
        .map_err(StatusError::from)
        .and_then(|raw| parse(&raw))
        .map_err(|e| StatusError::unavailable(format!("{}: {}", path.display(), e)));

    unavailable_as_none(metric, outcome)
}

fn unavailable_as_none<T>(metric: &str, outcome: Result<T>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("{} unavailable: {}", metric, err);
            None
        }
    }
}
