use crate::dependencies::domain::ScopeId;
use std::sync::Arc;

/// Receives a notification every time a scope publishes a new snapshot.
///
/// Called while the scope's batch lock is held, so notifications for one scope
/// arrive in version order. Implementations must not call back into the engine
/// for the same scope.
pub trait SnapshotListener: Send + Sync {
    fn snapshot_published(&self, scope: &ScopeId, version: u64);
}

impl SnapshotListener for () {
    fn snapshot_published(&self, _scope: &ScopeId, _version: u64) {}
}

impl<T: SnapshotListener + ?Sized> SnapshotListener for Arc<T> {
    fn snapshot_published(&self, scope: &ScopeId, version: u64) {
        (**self).snapshot_published(scope, version)
    }
}
