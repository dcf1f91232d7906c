use crate::dependencies::domain::{DependencyId, DependencyModel};
use serde::{Deserialize, Serialize};

/// One raw event in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyChange {
    /// Add a dependency, or replace the one with the same id.
    #[serde(rename = "add")]
    AddOrUpdate(DependencyModel),
    Remove(DependencyId),
}

impl DependencyChange {
    pub fn add(model: DependencyModel) -> Self {
        Self::AddOrUpdate(model)
    }

    pub fn remove(provider_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Remove(DependencyId::new(provider_type, id))
    }
}
