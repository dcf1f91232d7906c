use super::DependencyBatch;
use crate::dependencies::domain::ScopeId;
use serde::Deserialize;

/// A recorded stream of batches, replayed by the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub scopes: Vec<ScenarioScope>,
}

/// Ordered batches for a single project scope.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioScope {
    pub scope: ScopeId,
    #[serde(default)]
    pub batches: Vec<DependencyBatch>,
}

impl Scenario {
    pub fn batch_count(&self) -> usize {
        self.scopes.iter().map(|scope| scope.batches.len()).sum()
    }
}
