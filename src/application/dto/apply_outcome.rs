use serde::Serialize;

/// Result of applying one batch to a scope.
///
/// Stale and cancelled batches are expected race outcomes rather than errors;
/// in both cases the scope's published snapshot is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ApplyOutcome {
    Published { version: u64 },
    Stale { batch_version: u64, published_version: u64 },
    Cancelled { batch_version: u64 },
}

impl ApplyOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, ApplyOutcome::Published { .. })
    }
}
