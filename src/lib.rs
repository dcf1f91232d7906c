//! depsnap - dependency snapshot engine
//!
//! Folds per-provider dependency change batches into consistent, versioned,
//! immutable snapshots, one stream per project scope. An ordered filter
//! pipeline enforces cross-provider invariants such as keeping an SDK
//! reference in sync with the package that supplies it.
//!
//! # Architecture
//!
//! - **Domain Layer** (`dependencies`): node model, filter pipeline, built-in filters and provider descriptors
//! - **Application Layer** (`application`): the engine, the scenario replay use case, DTOs and factories
//! - **Ports** (`ports`): interface definitions for hosts and infrastructure
//! - **Adapters** (`adapters`): filesystem, console, formatters and notifications
//! - **Shared** (`shared`): errors, cancellation, tracing setup and file checks
//!
//! # Example
//!
//! ```
//! use depsnap::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! let icon_cache = Arc::new(IconSetCache::new());
//! let pipeline = PipelineFactory::create(icon_cache.clone(), &[])?;
//! let engine = DependencySnapshotEngine::new(
//!     pipeline,
//!     ProviderRegistry::with_builtin_providers(),
//!     icon_cache,
//! );
//!
//! let scope = ScopeId::new("net8.0");
//! let batch = DependencyBatch::new(
//!     1,
//!     vec![DependencyChange::add(DependencyModel::new("Package", "Newtonsoft.Json", true))],
//! );
//! let outcome = engine.apply_batch(&scope, batch)?;
//! assert_eq!(outcome, ApplyOutcome::Published { version: 1 });
//!
//! let snapshot = engine.get_snapshot(&scope);
//! assert!(snapshot.contains(&DependencyId::new("Package", "Newtonsoft.Json")));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependencies;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, TracingSnapshotListener};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemScenarioReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonSnapshotFormatter, TextSnapshotFormatter};
    pub use crate::adapters::outbound::notifications::{BroadcastSnapshotListener, SnapshotChanged};
    pub use crate::application::dto::{
        ApplyOutcome, DependencyBatch, DependencyChange, OutputFormat, Scenario, ScenarioScope,
    };
    pub use crate::application::factories::PipelineFactory;
    pub use crate::application::use_cases::{DependencySnapshotEngine, ReplayScenarioUseCase};
    pub use crate::dependencies::domain::{
        DependencyGroup, DependencyId, DependencyModel, DependencyNode, DependencySnapshot,
        DiagnosticLevel, ScopeId,
    };
    pub use crate::dependencies::providers::{ProviderRegistry, SubtreeProvider};
    pub use crate::dependencies::services::{
        AddDependencyContext, DependenciesSnapshotFilter, FilterPipeline, IconSetCache,
        RemoveDependencyContext,
    };
    pub use crate::ports::inbound::DependencySnapshotPort;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ScenarioReader, SnapshotFormatter, SnapshotListener,
    };
    pub use crate::shared::error::SnapshotError;
    pub use crate::shared::{CancellationFlag, Result};
}
