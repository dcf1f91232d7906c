use super::{AddDependencyContext, RemoveDependencyContext, SnapshotBuilder};
use crate::dependencies::domain::{DependencyId, DependencyNode};
use crate::dependencies::providers::ProviderRegistry;
use crate::shared::error::SnapshotError;
use crate::shared::Result;
use std::any::Any;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// One stage of the filter pipeline.
///
/// Stages run in ascending [`order`](Self::order). Each receives the candidate
/// as transformed by every earlier stage and must be total over the node
/// shapes it does not explicitly validate: returning `Err` (or panicking)
/// aborts the whole batch.
pub trait DependenciesSnapshotFilter: Send + Sync {
    /// Stable name used in fault reports and configuration.
    fn name(&self) -> &str;

    fn order(&self) -> i32;

    /// Called for every added or updated dependency.
    ///
    /// # Arguments
    /// * `dependency` - The candidate node as left by earlier stages
    /// * `providers` - Registered provider descriptors by provider type
    /// * `known_item_specs` - Item specs declared by the last project evaluation, if any
    /// * `context` - Accepts the candidate, looks up siblings and updates them
    fn before_add_or_update(
        &self,
        dependency: DependencyNode,
        _providers: &ProviderRegistry,
        _known_item_specs: Option<&HashSet<String>>,
        context: &mut AddDependencyContext<'_>,
    ) -> Result<()> {
        context.accept(dependency);
        Ok(())
    }

    /// Called for every removed dependency still present in the batch.
    fn before_remove(
        &self,
        _dependency: &DependencyNode,
        context: &mut RemoveDependencyContext<'_>,
    ) -> Result<()> {
        context.accept();
        Ok(())
    }
}

/// Ordered chain of [`DependenciesSnapshotFilter`]s.
#[derive(Clone, Default)]
pub struct FilterPipeline {
    filters: Vec<Arc<dyn DependenciesSnapshotFilter>>,
}

impl std::fmt::Debug for FilterPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.filters.iter().map(|filter| (filter.order(), filter.name())))
            .finish()
    }
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a filter. Filters with equal order keep their registration
    /// sequence.
    pub fn register(&mut self, filter: Arc<dyn DependenciesSnapshotFilter>) {
        self.filters.push(filter);
        // sort_by_key is stable
        self.filters.sort_by_key(|filter| filter.order());
    }

    pub fn with_filter(mut self, filter: Arc<dyn DependenciesSnapshotFilter>) -> Self {
        self.register(filter);
        self
    }

    /// Filter names in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Runs an added/updated node through every stage and commits the result
    /// into `builder`, unless a stage drops it.
    pub fn run_add_or_update(
        &self,
        dependency: DependencyNode,
        providers: &ProviderRegistry,
        known_item_specs: Option<&HashSet<String>>,
        builder: &mut SnapshotBuilder,
    ) -> std::result::Result<(), SnapshotError> {
        let id = dependency.id().clone();
        let mut candidate = dependency;

        for filter in &self.filters {
            let mut context = AddDependencyContext::new(builder);
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                filter.before_add_or_update(candidate, providers, known_item_specs, &mut context)
            }));
            check_outcome(filter.as_ref(), &id, outcome)?;

            if context.accept_count() > 1 {
                return Err(fault(filter.as_ref(), &id, "accepted the dependency more than once"));
            }

            match context.take_accepted() {
                Some(next) if next.id() != &id => {
                    return Err(fault(
                        filter.as_ref(),
                        &id,
                        &format!("replaced the dependency with a different id ({})", next.id()),
                    ));
                }
                Some(next) => candidate = next,
                None => {
                    tracing::debug!(target: "depsnap::pipeline", filter = filter.name(), %id, "Dependency dropped");
                    return Ok(());
                }
            }
        }

        builder.add_or_update(candidate);
        Ok(())
    }

    /// Runs a removal through every stage; the node is removed only if all
    /// stages accept.
    pub fn run_remove(
        &self,
        dependency: Arc<DependencyNode>,
        builder: &mut SnapshotBuilder,
    ) -> std::result::Result<(), SnapshotError> {
        let id = dependency.id().clone();

        for filter in &self.filters {
            let mut context = RemoveDependencyContext::new(builder);
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                filter.before_remove(&dependency, &mut context)
            }));
            check_outcome(filter.as_ref(), &id, outcome)?;

            if !context.accepted() {
                tracing::debug!(target: "depsnap::pipeline", filter = filter.name(), %id, "Removal vetoed");
                return Ok(());
            }
        }

        builder.remove(&id);
        Ok(())
    }
}

fn check_outcome(
    filter: &dyn DependenciesSnapshotFilter,
    id: &DependencyId,
    outcome: std::thread::Result<Result<()>>,
) -> std::result::Result<(), SnapshotError> {
    match outcome {
        Ok(Ok(())) => Ok(()),
        Ok(Err(error)) => Err(fault(filter, id, &format!("{:#}", error))),
        Err(payload) => Err(fault(
            filter,
            id,
            &format!("panicked: {}", panic_message(payload.as_ref())),
        )),
    }
}

fn fault(filter: &dyn DependenciesSnapshotFilter, id: &DependencyId, details: &str) -> SnapshotError {
    tracing::error!(target: "depsnap::pipeline", filter = filter.name(), %id, details, "Filter fault");
    SnapshotError::FilterFault {
        filter: filter.name().to_string(),
        dependency: id.to_string(),
        details: details.to_string(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
