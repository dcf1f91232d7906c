use crate::dependencies::domain::DependencySnapshot;
use crate::shared::Result;
use std::sync::Arc;

/// SnapshotFormatter port for rendering published snapshots
pub trait SnapshotFormatter {
    /// Renders the given snapshots, in order, into one document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, snapshots: &[Arc<DependencySnapshot>]) -> Result<String>;
}
