use super::{DependencyGroup, DependencyId, DependencyNode, ScopeId};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Immutable, versioned view of one scope's dependencies.
///
/// Nodes are held behind `Arc` so consecutive snapshots share every node a
/// batch did not touch.
#[derive(Debug, Clone, Serialize)]
pub struct DependencySnapshot {
    scope: ScopeId,
    version: u64,
    published_at: DateTime<Utc>,
    groups: Vec<DependencyGroup>,
    #[serde(serialize_with = "serialize_nodes")]
    dependencies: BTreeMap<DependencyId, Arc<DependencyNode>>,
}

impl DependencySnapshot {
    /// Version 0 snapshot published for a scope before any batch commits.
    pub fn empty(scope: ScopeId) -> Self {
        Self {
            scope,
            version: 0,
            published_at: Utc::now(),
            groups: Vec::new(),
            dependencies: BTreeMap::new(),
        }
    }

    pub(crate) fn new(
        scope: ScopeId,
        version: u64,
        dependencies: BTreeMap<DependencyId, Arc<DependencyNode>>,
        groups: Vec<DependencyGroup>,
    ) -> Self {
        Self {
            scope,
            version,
            published_at: Utc::now(),
            groups,
            dependencies,
        }
    }

    pub fn scope(&self) -> &ScopeId {
        &self.scope
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn get(&self, id: &DependencyId) -> Option<&Arc<DependencyNode>> {
        self.dependencies.get(id)
    }

    pub fn contains(&self, id: &DependencyId) -> bool {
        self.dependencies.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub fn dependencies(&self) -> impl Iterator<Item = &Arc<DependencyNode>> {
        self.dependencies.values()
    }

    pub(crate) fn dependency_map(&self) -> &BTreeMap<DependencyId, Arc<DependencyNode>> {
        &self.dependencies
    }

    pub fn dependencies_of<'a>(
        &'a self,
        provider_type: &'a str,
    ) -> impl Iterator<Item = &'a Arc<DependencyNode>> + 'a {
        self.dependencies
            .values()
            .filter(move |node| node.provider_type() == provider_type)
    }

    /// Dependencies accepted by a consumer-defined predicate, e.g. a tree's
    /// visibility rule over node flags.
    pub fn dependencies_matching<'a, P>(
        &'a self,
        predicate: P,
    ) -> impl Iterator<Item = &'a Arc<DependencyNode>> + 'a
    where
        P: Fn(&DependencyNode) -> bool + 'a,
    {
        self.dependencies.values().filter(move |node| predicate(node))
    }

    pub fn groups(&self) -> &[DependencyGroup] {
        &self.groups
    }

    pub fn group(&self, provider_type: &str) -> Option<&DependencyGroup> {
        self.groups
            .iter()
            .find(|group| group.provider_type() == provider_type)
    }

    pub fn has_unresolved_dependency(&self) -> bool {
        self.dependencies.values().any(|node| !node.resolved())
    }
}

fn serialize_nodes<S: Serializer>(
    dependencies: &BTreeMap<DependencyId, Arc<DependencyNode>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(dependencies.values())
}
