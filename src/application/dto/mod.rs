/// Data Transfer Objects for the application layer
///
/// Batches flow in from adapters, outcomes flow back out; the domain layer
/// never sees either.
mod apply_outcome;
mod dependency_batch;
mod dependency_change;
mod output_format;
mod scenario;

pub use apply_outcome::ApplyOutcome;
pub use dependency_batch::DependencyBatch;
pub use dependency_change::DependencyChange;
pub use output_format::OutputFormat;
pub use scenario::{Scenario, ScenarioScope};
