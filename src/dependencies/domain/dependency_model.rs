use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw dependency data as reported by a provider, before it is shaped into a
/// [`DependencyNode`](super::DependencyNode) by the provider's descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyModel {
    #[serde(rename = "provider")]
    pub provider_type: String,
    /// Path or package name, unique within the provider.
    pub id: String,
    #[serde(default)]
    pub original_item_spec: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub implicit: bool,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl DependencyModel {
    pub fn new(provider_type: impl Into<String>, id: impl Into<String>, resolved: bool) -> Self {
        Self {
            provider_type: provider_type.into(),
            id: id.into(),
            original_item_spec: String::new(),
            caption: None,
            resolved,
            implicit: false,
            properties: BTreeMap::new(),
        }
    }

    pub fn with_original_item_spec(mut self, original_item_spec: impl Into<String>) -> Self {
        self.original_item_spec = original_item_spec.into();
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_implicit(mut self, implicit: bool) -> Self {
        self.implicit = implicit;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}
