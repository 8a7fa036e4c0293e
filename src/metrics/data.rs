//! Data structures for the status snapshot.

use serde::{Deserialize, Serialize};

/// One self-contained set of host vitals, built fresh for every request.
///
/// Field order matches the JSON key order of `/api/pi-status`. Every
/// optional field serializes as `null` when its source could not be read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Unix timestamp in seconds
    pub time: i64,
    /// System hostname
    pub hostname: String,
    /// CPU temperature in Celsius, one decimal
    pub cpu_temp_c: Option<f64>,
    /// One-minute load average, two decimals
    pub load1: Option<f64>,
    /// Memory usage
    pub mem: Option<MemoryUsage>,
    /// Root filesystem usage
    pub disk: Option<DiskUsage>,
    /// Human readable uptime, e.g. "2d 3h 4m"
    pub uptime: Option<String>,
    /// Local address the OS would route outbound traffic from
    pub ip: Option<String>,
}

/// Memory usage in GiB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemoryUsage {
    pub total_gb: f64,
    pub used_gb: f64,
    pub used_pct: f64,
}

/// Filesystem usage in GiB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiskUsage {
    pub used_gb: f64,
    pub total_gb: f64,
    pub used_pct: f64,
}

impl StatusSnapshot {
    /// Create an empty snapshot stamped with the current time.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            time: chrono::Utc::now().timestamp(),
            hostname: hostname.into(),
            cpu_temp_c: None,
            load1: None,
            mem: None,
            disk: None,
            uptime: None,
            ip: None,
        }
    }
}
