//! Snapshot assembly from the individual metric readers.

use crate::metrics::data::StatusSnapshot;
use crate::metrics::readers;
use crate::metrics::sources::MetricSources;
use crate::metrics::traits::SnapshotProvider;

/// Builds a [`StatusSnapshot`] by running every metric reader once.
///
/// Holds no state between calls beyond the source locations, so one
/// collector can serve any number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct StatusCollector {
    sources: MetricSources,
}

impl StatusCollector {
    /// Create a collector reading the standard OS sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collector reading from custom source locations.
    pub fn with_sources(sources: MetricSources) -> Self {
        Self { sources }
    }

    /// The source locations this collector reads.
    pub fn sources(&self) -> &MetricSources {
        &self.sources
    }

    /// Collect a snapshot, assembling it field by field.
    pub fn collect(&self) -> StatusSnapshot {
        let mut snapshot = StatusSnapshot::new(readers::read_hostname());
        snapshot.cpu_temp_c = readers::read_cpu_temp(&self.sources.thermal);
        snapshot.load1 = readers::read_load1();
        snapshot.mem = readers::read_memory(&self.sources.meminfo);
        snapshot.disk = readers::read_disk_usage(&self.sources.disk_root);
        snapshot.uptime = readers::read_uptime(&self.sources.uptime);
        snapshot.ip = readers::read_local_ip(self.sources.ip_probe);
        snapshot
    }
}

impl SnapshotProvider for StatusCollector {
    fn snapshot(&self) -> StatusSnapshot {
        self.collect()
    }
}
