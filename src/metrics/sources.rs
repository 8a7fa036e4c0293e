//! Locations of the OS data sources the readers consult.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;

/// Raspberry Pi SoC thermal zone, millidegrees Celsius.
pub const THERMAL_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";
/// Kernel memory statistics.
pub const MEMINFO_PATH: &str = "/proc/meminfo";
/// Seconds since boot, followed by idle seconds.
pub const UPTIME_PATH: &str = "/proc/uptime";
/// Filesystem whose usage is reported.
pub const DISK_ROOT: &str = "/";
/// Public address used only to let the OS choose an outbound route.
pub const IP_PROBE_ADDR: SocketAddrV4 = SocketAddrV4::new(Ipv4Addr::new(8, 8, 8, 8), 80);

/// Where each metric reader gets its data from.
///
/// The server always runs with [`MetricSources::default`]; the fields exist
/// so a collector can be pointed at fixture files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSources {
    pub thermal: PathBuf,
    pub meminfo: PathBuf,
    pub uptime: PathBuf,
    pub disk_root: PathBuf,
    pub ip_probe: SocketAddr,
}

impl Default for MetricSources {
    fn default() -> Self {
        Self {
            thermal: PathBuf::from(THERMAL_PATH),
            meminfo: PathBuf::from(MEMINFO_PATH),
            uptime: PathBuf::from(UPTIME_PATH),
            disk_root: PathBuf::from(DISK_ROOT),
            ip_probe: SocketAddr::V4(IP_PROBE_ADDR),
        }
    }
}

impl MetricSources {
    /// Set the thermal sensor path.
    pub fn with_thermal(mut self, path: impl Into<PathBuf>) -> Self {
        self.thermal = path.into();
        self
    }

    /// Set the meminfo path.
    pub fn with_meminfo(mut self, path: impl Into<PathBuf>) -> Self {
        self.meminfo = path.into();
        self
    }

    /// Set the uptime path.
    pub fn with_uptime(mut self, path: impl Into<PathBuf>) -> Self {
        self.uptime = path.into();
        self
    }

    /// Set the mount point whose usage is reported.
    pub fn with_disk_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.disk_root = path.into();
        self
    }

    /// Set the address used to pick the outbound route for `ip`.
    pub fn with_ip_probe(mut self, addr: SocketAddr) -> Self {
        self.ip_probe = addr;
        self
    }
}
