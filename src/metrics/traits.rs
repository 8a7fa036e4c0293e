//! Traits for snapshot production.

use crate::metrics::data::StatusSnapshot;

/// Produces a fresh status snapshot on demand.
///
/// Implementations perform blocking reads, so callers on an async runtime
/// should invoke [`SnapshotProvider::snapshot`] from a blocking context.
/// A provider never fails as a whole: unreadable sources surface as `None`
/// fields inside the snapshot.
pub trait SnapshotProvider: Send + Sync + 'static {
    /// Collect a snapshot of the host right now.
    fn snapshot(&self) -> StatusSnapshot;
}
