mod filter_context;
mod filter_pipeline;
mod icon_set_cache;
mod snapshot_builder;

pub use filter_context::{AddDependencyContext, RemoveDependencyContext};
pub use filter_pipeline::{DependenciesSnapshotFilter, FilterPipeline};
pub use icon_set_cache::IconSetCache;
pub use snapshot_builder::SnapshotBuilder;
