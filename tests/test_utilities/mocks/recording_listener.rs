use depsnap::prelude::*;
use std::sync::Mutex;

/// SnapshotListener that records every notification it receives
#[derive(Default)]
pub struct RecordingListener {
    published: Mutex<Vec<(ScopeId, u64)>>,
}

#[allow(dead_code)]
impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<(ScopeId, u64)> {
        self.published.lock().unwrap().clone()
    }

    pub fn versions_for(&self, scope: &ScopeId) -> Vec<u64> {
        self.published()
            .into_iter()
            .filter(|(published_scope, _)| published_scope == scope)
            .map(|(_, version)| version)
            .collect()
    }
}

impl SnapshotListener for RecordingListener {
    fn snapshot_published(&self, scope: &ScopeId, version: u64) {
        self.published.lock().unwrap().push((scope.clone(), version));
    }
}
