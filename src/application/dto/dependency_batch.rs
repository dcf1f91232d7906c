use super::DependencyChange;
use crate::shared::CancellationFlag;
use serde::Deserialize;
use std::collections::HashSet;

/// A versioned set of changes that produces at most one new snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct DependencyBatch {
    /// Must be greater than the scope's published version, or the batch is stale.
    pub version: u64,
    #[serde(default)]
    pub changes: Vec<DependencyChange>,
    /// Item specs from a fresh project evaluation; replaces the scope's stored
    /// set once the batch commits.
    #[serde(default)]
    pub known_item_specs: Option<HashSet<String>>,
    #[serde(skip)]
    pub cancellation: Option<CancellationFlag>,
}

impl DependencyBatch {
    pub fn new(version: u64, changes: Vec<DependencyChange>) -> Self {
        Self {
            version,
            changes,
            known_item_specs: None,
            cancellation: None,
        }
    }

    pub fn with_known_item_specs<I, S>(mut self, item_specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.known_item_specs = Some(item_specs.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_cancellation(mut self, cancellation: CancellationFlag) -> Self {
        self.cancellation = Some(cancellation);
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationFlag::is_cancelled)
    }
}
