use crate::application::dto::{ApplyOutcome, DependencyBatch, DependencyChange};
use crate::dependencies::domain::{DependencyId, DependencyNode, DependencySnapshot, ScopeId};
use crate::dependencies::providers::ProviderRegistry;
use crate::dependencies::services::{FilterPipeline, IconSetCache, SnapshotBuilder};
use crate::ports::inbound::DependencySnapshotPort;
use crate::ports::outbound::SnapshotListener;
use crate::shared::error::SnapshotError;
use dashmap::DashMap;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

/// Per-scope inputs that persist across batches. Guarded by the batch lock.
#[derive(Debug, Default)]
struct ScopeInputs {
    known_item_specs: Option<HashSet<String>>,
    /// Set once the scope is removed; batches that were waiting re-resolve it.
    retired: bool,
}

struct ScopeState {
    /// Serializes batch processing for one scope.
    batch_lock: Mutex<ScopeInputs>,
    /// Readers only ever take this briefly to clone the `Arc`.
    published: RwLock<Arc<DependencySnapshot>>,
}

impl ScopeState {
    fn new(scope: ScopeId, version: u64) -> Self {
        Self {
            batch_lock: Mutex::new(ScopeInputs::default()),
            published: RwLock::new(Arc::new(empty_snapshot(scope, version))),
        }
    }

    fn lock_inputs(&self) -> MutexGuard<'_, ScopeInputs> {
        self.batch_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn current(&self) -> Arc<DependencySnapshot> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn publish(&self, snapshot: Arc<DependencySnapshot>) {
        *self
            .published
            .write()
            .unwrap_or_else(PoisonError::into_inner) = snapshot;
    }
}

fn empty_snapshot(scope: ScopeId, version: u64) -> DependencySnapshot {
    DependencySnapshot::new(scope, version, BTreeMap::new(), Vec::new())
}

/// DependencySnapshotEngine - folds versioned batches into published snapshots
///
/// One engine serves every project scope of a host. Batches for the same scope
/// are applied one at a time; batches for different scopes run concurrently and
/// share only the icon set cache.
///
/// # Type Parameters
/// * `L` - SnapshotListener notified after each publish
pub struct DependencySnapshotEngine<L = ()> {
    pipeline: FilterPipeline,
    providers: ProviderRegistry,
    icon_cache: Arc<IconSetCache>,
    scopes: DashMap<ScopeId, Arc<ScopeState>>,
    /// Last published version of each removed scope. A recreated scope
    /// starts from it so versions never go backwards.
    removed_versions: DashMap<ScopeId, u64>,
    listener: L,
}

impl DependencySnapshotEngine {
    pub fn new(
        pipeline: FilterPipeline,
        providers: ProviderRegistry,
        icon_cache: Arc<IconSetCache>,
    ) -> Self {
        Self {
            pipeline,
            providers,
            icon_cache,
            scopes: DashMap::new(),
            removed_versions: DashMap::new(),
            listener: (),
        }
    }
}

impl<L: SnapshotListener> DependencySnapshotEngine<L> {
    /// Replaces the listener. Only meaningful before the first batch.
    pub fn with_listener<L2: SnapshotListener>(self, listener: L2) -> DependencySnapshotEngine<L2> {
        DependencySnapshotEngine {
            pipeline: self.pipeline,
            providers: self.providers,
            icon_cache: self.icon_cache,
            scopes: self.scopes,
            removed_versions: self.removed_versions,
            listener,
        }
    }

    pub fn icon_cache(&self) -> &Arc<IconSetCache> {
        &self.icon_cache
    }

    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    pub fn pipeline(&self) -> &FilterPipeline {
        &self.pipeline
    }

    /// Scopes that have received at least one batch, sorted.
    pub fn scopes(&self) -> Vec<ScopeId> {
        let mut scopes: Vec<ScopeId> = self.scopes.iter().map(|entry| entry.key().clone()).collect();
        scopes.sort();
        scopes
    }

    /// Drops all state for a scope, e.g. when its project is unloaded.
    ///
    /// Waits for an in-flight batch of the scope to finish. The scope's last
    /// published version is kept: if the scope comes back, batches at or below
    /// that version are still stale.
    pub fn remove_scope(&self, scope: &ScopeId) -> bool {
        loop {
            let Some(state) = self.scopes.get(scope).map(|entry| entry.value().clone()) else {
                return false;
            };
            let mut inputs = state.lock_inputs();
            if inputs.retired {
                // Lost a race with another removal; look again.
                continue;
            }
            inputs.retired = true;

            let version = state.current().version();
            self.removed_versions.insert(scope.clone(), version);
            self.scopes
                .remove_if(scope, |_, current| Arc::ptr_eq(current, &state));
            tracing::debug!(target: "depsnap::engine", %scope, version, "Scope removed");
            return true;
        }
    }

    fn removed_version(&self, scope: &ScopeId) -> u64 {
        self.removed_versions
            .get(scope)
            .map_or(0, |version| *version.value())
    }

    /// The item specs the implicit filter currently evaluates against.
    pub fn known_item_specs(&self, scope: &ScopeId) -> Option<HashSet<String>> {
        let state = self.scopes.get(scope)?.clone();
        let inputs = state.lock_inputs();
        inputs.known_item_specs.clone()
    }

    fn scope_state(&self, scope: &ScopeId) -> Arc<ScopeState> {
        // Clone the Arc out so the shard guard is released before locking.
        self.scopes
            .entry(scope.clone())
            .or_insert_with(|| Arc::new(ScopeState::new(scope.clone(), self.removed_version(scope))))
            .clone()
    }

    fn apply_change(
        &self,
        change: &DependencyChange,
        known_item_specs: Option<&HashSet<String>>,
        builder: &mut SnapshotBuilder,
    ) -> Result<(), SnapshotError> {
        match change {
            DependencyChange::AddOrUpdate(model) => {
                let provider = self.providers.get(&model.provider_type).ok_or_else(|| {
                    SnapshotError::UnknownProvider {
                        provider_type: model.provider_type.clone(),
                    }
                })?;
                let node = provider
                    .create_node(model, &self.icon_cache)
                    .map_err(|error| SnapshotError::InvalidDependency {
                        details: format!("{:#}", error),
                    })?;
                self.pipeline
                    .run_add_or_update(node, &self.providers, known_item_specs, builder)
            }
            DependencyChange::Remove(id) => {
                if !self.providers.contains(id.provider_type()) {
                    return Err(SnapshotError::UnknownProvider {
                        provider_type: id.provider_type().to_string(),
                    });
                }
                match builder.try_get_dependency(id) {
                    Some(node) => self.pipeline.run_remove(node, builder),
                    None => {
                        tracing::debug!(target: "depsnap::engine", %id, "Removal of unknown dependency ignored");
                        Ok(())
                    }
                }
            }
        }
    }
}

impl<L: SnapshotListener> DependencySnapshotPort for DependencySnapshotEngine<L> {
    fn apply_batch(
        &self,
        scope: &ScopeId,
        batch: DependencyBatch,
    ) -> Result<ApplyOutcome, SnapshotError> {
        let state = self.scope_state(scope);
        let mut inputs = state.lock_inputs();
        if inputs.retired {
            // Removed while this batch waited for the lock; use the recreated scope.
            drop(inputs);
            return self.apply_batch(scope, batch);
        }

        let previous = state.current();
        if batch.version <= previous.version() {
            tracing::warn!(
                target: "depsnap::engine",
                %scope,
                batch_version = batch.version,
                published_version = previous.version(),
                "Discarding stale batch"
            );
            return Ok(ApplyOutcome::Stale {
                batch_version: batch.version,
                published_version: previous.version(),
            });
        }

        let cancelled = ApplyOutcome::Cancelled {
            batch_version: batch.version,
        };
        if batch.is_cancelled() {
            tracing::warn!(target: "depsnap::engine", %scope, version = batch.version, "Batch cancelled before processing");
            return Ok(cancelled);
        }

        tracing::debug!(
            target: "depsnap::engine",
            %scope,
            version = batch.version,
            changes = batch.changes.len(),
            "Applying batch"
        );

        let known_item_specs = batch
            .known_item_specs
            .as_ref()
            .or(inputs.known_item_specs.as_ref());
        let mut builder = SnapshotBuilder::new(previous);
        for change in &batch.changes {
            if batch.is_cancelled() {
                tracing::warn!(target: "depsnap::engine", %scope, version = batch.version, "Batch cancelled mid-flight");
                return Ok(cancelled);
            }
            if let Err(error) = self.apply_change(change, known_item_specs, &mut builder) {
                tracing::warn!(target: "depsnap::engine", %scope, version = batch.version, %error, "Batch rejected");
                return Err(error);
            }
        }

        if batch.is_cancelled() {
            tracing::warn!(target: "depsnap::engine", %scope, version = batch.version, "Batch cancelled before publish");
            return Ok(cancelled);
        }

        let version = batch.version;
        let snapshot = builder.build(scope.clone(), version, &self.providers, &self.icon_cache);
        state.publish(Arc::new(snapshot));
        if let Some(item_specs) = batch.known_item_specs {
            inputs.known_item_specs = Some(item_specs);
        }

        tracing::debug!(target: "depsnap::engine", %scope, version, "Snapshot published");
        self.listener.snapshot_published(scope, version);

        Ok(ApplyOutcome::Published { version })
    }

    fn get_snapshot(&self, scope: &ScopeId) -> Arc<DependencySnapshot> {
        match self.scopes.get(scope) {
            Some(state) => state.current(),
            None => Arc::new(empty_snapshot(scope.clone(), self.removed_version(scope))),
        }
    }

    fn try_get_dependency(
        &self,
        scope: &ScopeId,
        id: &DependencyId,
    ) -> Option<Arc<DependencyNode>> {
        self.get_snapshot(scope).get(id).cloned()
    }
}
