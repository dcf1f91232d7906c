use super::SnapshotBuilder;
use crate::dependencies::domain::{DependencyId, DependencyNode};
use std::sync::Arc;

/// Scratch state handed to one filter for one add/update event.
///
/// The filter forwards the (possibly transformed) candidate with
/// [`accept`](Self::accept), or returns without accepting to drop it.
/// [`add_or_update`](Self::add_or_update) writes a different node into the
/// batch as a side effect.
pub struct AddDependencyContext<'a> {
    builder: &'a mut SnapshotBuilder,
    accepted: Option<DependencyNode>,
    accept_count: usize,
}

impl<'a> AddDependencyContext<'a> {
    pub(crate) fn new(builder: &'a mut SnapshotBuilder) -> Self {
        Self {
            builder,
            accepted: None,
            accept_count: 0,
        }
    }

    /// Looks up a node decided earlier in this batch, or present in the
    /// previous snapshot.
    pub fn try_get_dependency(&self, id: &DependencyId) -> Option<Arc<DependencyNode>> {
        self.builder.try_get_dependency(id)
    }

    /// Forwards `dependency` to the next filter, or commits it when this is
    /// the last one.
    pub fn accept(&mut self, dependency: DependencyNode) {
        self.accept_count += 1;
        self.accepted = Some(dependency);
    }

    /// Schedules insertion or replacement of another node in this batch.
    pub fn add_or_update(&mut self, dependency: DependencyNode) {
        self.builder.add_or_update(dependency);
    }

    pub(crate) fn accept_count(&self) -> usize {
        self.accept_count
    }

    pub(crate) fn take_accepted(&mut self) -> Option<DependencyNode> {
        self.accepted.take()
    }
}

/// Scratch state handed to one filter for one removal event.
///
/// Removal proceeds only if every filter calls [`accept`](Self::accept).
pub struct RemoveDependencyContext<'a> {
    builder: &'a mut SnapshotBuilder,
    accepted: bool,
}

impl<'a> RemoveDependencyContext<'a> {
    pub(crate) fn new(builder: &'a mut SnapshotBuilder) -> Self {
        Self {
            builder,
            accepted: false,
        }
    }

    pub fn try_get_dependency(&self, id: &DependencyId) -> Option<Arc<DependencyNode>> {
        self.builder.try_get_dependency(id)
    }

    /// Lets the removal continue to the next filter.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    pub fn add_or_update(&mut self, dependency: DependencyNode) {
        self.builder.add_or_update(dependency);
    }

    pub(crate) fn accepted(&self) -> bool {
        self.accepted
    }
}
