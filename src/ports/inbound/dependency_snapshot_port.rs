use crate::application::dto::{ApplyOutcome, DependencyBatch};
use crate::dependencies::domain::{DependencyId, DependencyNode, DependencySnapshot, ScopeId};
use crate::shared::error::SnapshotError;
use std::sync::Arc;

/// DependencySnapshotPort - Inbound port of the snapshot engine
///
/// Providers push batches in through `apply_batch`; the tree UI and reference
/// tooling read the published state back out.
pub trait DependencySnapshotPort {
    /// Folds a batch into a new snapshot for `scope` and publishes it.
    ///
    /// # Returns
    /// `Published` with the new version, or `Stale`/`Cancelled` when the
    /// batch was discarded without effect.
    ///
    /// # Errors
    /// Returns a [`SnapshotError`] if a filter faulted or a change could not
    /// be turned into a node. The previously published snapshot is retained.
    fn apply_batch(
        &self,
        scope: &ScopeId,
        batch: DependencyBatch,
    ) -> Result<ApplyOutcome, SnapshotError>;

    /// Current published snapshot; an empty version-0 snapshot for scopes that
    /// have never published.
    fn get_snapshot(&self, scope: &ScopeId) -> Arc<DependencySnapshot>;

    /// Point lookup against the current published snapshot.
    fn try_get_dependency(
        &self,
        scope: &ScopeId,
        id: &DependencyId,
    ) -> Option<Arc<DependencyNode>>;
}
