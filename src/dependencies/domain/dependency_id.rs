use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite key identifying one dependency across the whole graph.
///
/// Equality is exact on both fields; no case folding is applied to either the
/// provider type or the provider-local id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DependencyId {
    #[serde(rename = "provider")]
    provider_type: String,
    id: String,
}

impl DependencyId {
    pub fn new(provider_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            provider_type: provider_type.into(),
            id: id.into(),
        }
    }

    pub fn provider_type(&self) -> &str {
        &self.provider_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for DependencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider_type, self.id)
    }
}
