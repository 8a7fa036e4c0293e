//! Host metrics: the snapshot data model and the readers that fill it.
//!
//! Every metric comes from a single OS data source (sysfs, procfs, the
//! filesystem table or a routing socket) and is read independently, so a
//! missing source only blanks its own field of the snapshot.

pub mod collector;
pub mod data;
pub mod readers;
pub mod sources;
pub mod traits;
pub mod units;

// Re-export commonly used items
pub use collector::StatusCollector;
pub use data::{DiskUsage, MemoryUsage, StatusSnapshot};
pub use sources::MetricSources;
pub use traits::SnapshotProvider;
