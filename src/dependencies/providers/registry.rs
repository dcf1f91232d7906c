use super::{builtin, SubtreeProvider};
use crate::shared::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Lookup of provider descriptors by provider type.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<SubtreeProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the Framework, Package, Sdk, ProjectReference and
    /// Assembly providers.
    pub fn with_builtin_providers() -> Self {
        let mut registry = Self::new();
        for provider in builtin::all() {
            registry
                .providers
                .insert(provider.provider_type().to_string(), Arc::new(provider));
        }
        registry
    }

    /// Registers a provider.
    ///
    /// # Errors
    /// Returns an error if a provider with the same type is already registered.
    pub fn register(&mut self, provider: SubtreeProvider) -> Result<()> {
        let provider_type = provider.provider_type().to_string();
        if self.providers.contains_key(&provider_type) {
            anyhow::bail!("A provider for type '{}' is already registered", provider_type);
        }
        self.providers.insert(provider_type, Arc::new(provider));
        Ok(())
    }

    pub fn get(&self, provider_type: &str) -> Option<&Arc<SubtreeProvider>> {
        self.providers.get(provider_type)
    }

    pub fn contains(&self, provider_type: &str) -> bool {
        self.providers.contains_key(provider_type)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<SubtreeProvider>> {
        self.providers.values()
    }
}
