/// Use cases module containing application business logic orchestration
mod dependency_snapshot_engine;
mod replay_scenario;

pub use dependency_snapshot_engine::DependencySnapshotEngine;
pub use replay_scenario::{BatchResult, ReplayReport, ReplayScenarioUseCase};
