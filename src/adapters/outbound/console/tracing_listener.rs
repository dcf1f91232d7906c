use crate::dependencies::domain::ScopeId;
use crate::ports::outbound::SnapshotListener;

/// Logs every publish at `info` under the `depsnap::publish` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSnapshotListener;

impl SnapshotListener for TracingSnapshotListener {
    fn snapshot_published(&self, scope: &ScopeId, version: u64) {
        tracing::info!(target: "depsnap::publish", %scope, version, "Snapshot published");
    }
}
