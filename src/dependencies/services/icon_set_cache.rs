use crate::dependencies::domain::{Icon, IconSet};
use dashmap::DashMap;
use std::sync::Arc;

/// IconSetCache interns icon sets so structurally equal sets share one allocation.
///
/// Constructed once per engine and shared by reference (`Arc<IconSetCache>`)
/// with every scope and filter. The backing `DashMap` shards its locks, so
/// concurrent lookups from unrelated scopes do not serialize on one mutex.
///
/// Entries are never evicted: distinct icon tuples are bounded by the number
/// of provider types and their implicit variants.
#[derive(Debug, Default)]
pub struct IconSetCache {
    sets: DashMap<IconSet, Arc<IconSet>>,
}

impl IconSetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared instance for the given four icons.
    ///
    /// # Arguments
    /// * `icon` - Icon shown when the dependency is resolved
    /// * `expanded_icon` - Icon shown when the resolved node is expanded
    /// * `unresolved_icon` - Icon shown when the dependency is unresolved
    /// * `unresolved_expanded_icon` - Icon shown when the unresolved node is expanded
    pub fn get_or_add_icon_set(
        &self,
        icon: Icon,
        expanded_icon: Icon,
        unresolved_icon: Icon,
        unresolved_expanded_icon: Icon,
    ) -> Arc<IconSet> {
        self.intern(IconSet::new(
            icon,
            expanded_icon,
            unresolved_icon,
            unresolved_expanded_icon,
        ))
    }

    /// Returns the shared instance structurally equal to `icon_set`.
    pub fn intern(&self, icon_set: IconSet) -> Arc<IconSet> {
        if let Some(existing) = self.sets.get(&icon_set) {
            return Arc::clone(existing.value());
        }

        // entry() re-checks under the shard write lock, so two racing inserts
        // still agree on a single instance
        let entry = self
            .sets
            .entry(icon_set.clone())
            .or_insert_with(|| Arc::new(icon_set));
        let shared = Arc::clone(entry.value());
        drop(entry);

        tracing::trace!(target: "depsnap::cache", icon = %shared.icon(), "Interned icon set");
        shared
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
