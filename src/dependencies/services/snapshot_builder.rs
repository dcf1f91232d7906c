use super::IconSetCache;
use crate::dependencies::domain::{DependencyId, DependencyNode, DependencySnapshot, ScopeId};
use crate::dependencies::providers::ProviderRegistry;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

#[derive(Debug, Clone)]
enum PendingChange {
    Upsert(Arc<DependencyNode>),
    Removed,
}

/// Accumulates one batch's changes on top of the previously published snapshot.
///
/// Nothing written here is visible outside the batch until [`build`](Self::build)
/// produces the next snapshot, so partially applied cross-filter effects are
/// never observed by readers.
#[derive(Debug)]
pub struct SnapshotBuilder {
    previous: Arc<DependencySnapshot>,
    pending: HashMap<DependencyId, PendingChange>,
}

impl SnapshotBuilder {
    pub fn new(previous: Arc<DependencySnapshot>) -> Self {
        Self {
            previous,
            pending: HashMap::new(),
        }
    }

    pub fn previous(&self) -> &Arc<DependencySnapshot> {
        &self.previous
    }

    /// Looks up a node in this batch first, then in the previous snapshot.
    pub fn try_get_dependency(&self, id: &DependencyId) -> Option<Arc<DependencyNode>> {
        match self.pending.get(id) {
            Some(PendingChange::Upsert(node)) => Some(Arc::clone(node)),
            Some(PendingChange::Removed) => None,
            None => self.previous.get(id).cloned(),
        }
    }

    pub fn add_or_update(&mut self, node: DependencyNode) {
        self.pending
            .insert(node.id().clone(), PendingChange::Upsert(Arc::new(node)));
    }

    pub fn remove(&mut self, id: &DependencyId) {
        self.pending.insert(id.clone(), PendingChange::Removed);
    }

    /// Number of ids touched by this batch so far.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Folds the pending changes into a new snapshot.
    ///
    /// Group nodes are derived for every registered provider type that still
    /// has at least one dependency.
    pub fn build(
        self,
        scope: ScopeId,
        version: u64,
        providers: &ProviderRegistry,
        icon_cache: &IconSetCache,
    ) -> DependencySnapshot {
        let mut dependencies = self.previous.dependency_map().clone();
        for (id, change) in self.pending {
            match change {
                PendingChange::Upsert(node) => {
                    dependencies.insert(id, node);
                }
                PendingChange::Removed => {
                    dependencies.remove(&id);
                }
            }
        }

        let mut unresolved_by_type: BTreeMap<&str, bool> = BTreeMap::new();
        for node in dependencies.values() {
            let unresolved = unresolved_by_type.entry(node.provider_type()).or_insert(false);
            *unresolved |= !node.resolved();
        }

        let groups = unresolved_by_type
            .into_iter()
            .filter_map(|(provider_type, has_unresolved)| {
                providers
                    .get(provider_type)
                    .map(|provider| provider.create_group(has_unresolved, icon_cache))
            })
            .collect();

        DependencySnapshot::new(scope, version, dependencies, groups)
    }
}
