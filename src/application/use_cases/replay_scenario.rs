use crate::application::dto::{ApplyOutcome, Scenario};
use crate::dependencies::domain::{DependencySnapshot, ScopeId};
use crate::ports::inbound::DependencySnapshotPort;
use crate::ports::outbound::ProgressReporter;
use crate::shared::error::{CliError, SnapshotError};
use crate::shared::Result;
use std::sync::Arc;

/// Outcome of a single replayed batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub scope: ScopeId,
    pub version: u64,
    pub outcome: std::result::Result<ApplyOutcome, SnapshotError>,
}

/// Everything a replay produced.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// Final snapshot of every reported scope, in scenario order.
    pub snapshots: Vec<Arc<DependencySnapshot>>,
    pub batches: Vec<BatchResult>,
}

impl ReplayReport {
    pub fn rejected(&self) -> impl Iterator<Item = (&BatchResult, &SnapshotError)> {
        self.batches
            .iter()
            .filter_map(|batch| batch.outcome.as_ref().err().map(|error| (batch, error)))
    }

    pub fn has_rejections(&self) -> bool {
        self.rejected().next().is_some()
    }
}

/// ReplayScenarioUseCase - feeds a recorded scenario through the engine
///
/// A rejected batch does not stop the replay: the scope keeps its previous
/// snapshot and later batches are still applied.
pub struct ReplayScenarioUseCase<E, PR> {
    engine: E,
    progress_reporter: PR,
}

impl<E, PR> ReplayScenarioUseCase<E, PR>
where
    E: DependencySnapshotPort,
    PR: ProgressReporter,
{
    pub fn new(engine: E, progress_reporter: PR) -> Self {
        Self {
            engine,
            progress_reporter,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Replays every batch, then collects the final snapshots.
    ///
    /// # Arguments
    /// * `scenario` - The batches to apply, grouped by scope
    /// * `only_scope` - Replay and report only this scope; other scopes are skipped
    ///
    /// # Errors
    /// Returns an error if `only_scope` does not name a scope of the scenario
    pub fn execute(&self, mut scenario: Scenario, only_scope: Option<&ScopeId>) -> Result<ReplayReport> {
        if let Some(wanted) = only_scope {
            if !scenario.scopes.iter().any(|scope| &scope.scope == wanted) {
                return Err(CliError::InvalidScenario {
                    reason: format!("scope '{}' does not appear in the scenario", wanted),
                }
                .into());
            }
            scenario.scopes.retain(|scope| &scope.scope == wanted);
        }

        let total = scenario.batch_count();
        self.progress_reporter.report(&format!(
            "📖 Replaying {} batch(es) across {} scope(s)",
            total,
            scenario.scopes.len()
        ));

        let mut scopes = Vec::with_capacity(scenario.scopes.len());
        let mut batches = Vec::with_capacity(total);
        for scenario_scope in scenario.scopes {
            let scope = scenario_scope.scope;
            for batch in scenario_scope.batches {
                let version = batch.version;
                let outcome = self.engine.apply_batch(&scope, batch);
                self.report_outcome(&scope, version, &outcome);

                batches.push(BatchResult {
                    scope: scope.clone(),
                    version,
                    outcome,
                });
                self.progress_reporter.report_progress(
                    batches.len(),
                    total,
                    Some(&format!("{} v{}", scope, version)),
                );
            }
            scopes.push(scope);
        }

        let snapshots = scopes
            .iter()
            .map(|scope| self.engine.get_snapshot(scope))
            .collect();

        let rejected = batches.iter().filter(|batch| batch.outcome.is_err()).count();
        if rejected == 0 {
            self.progress_reporter
                .report_completion(&format!("✅ Replayed {} batch(es)", total));
        } else {
            self.progress_reporter.report_completion(&format!(
                "⚠️  Replayed {} batch(es), {} rejected",
                total, rejected
            ));
        }

        Ok(ReplayReport { snapshots, batches })
    }

    fn report_outcome(
        &self,
        scope: &ScopeId,
        version: u64,
        outcome: &std::result::Result<ApplyOutcome, SnapshotError>,
    ) {
        match outcome {
            Ok(ApplyOutcome::Published { .. }) => {}
            Ok(ApplyOutcome::Stale {
                published_version, ..
            }) => self.progress_reporter.report_error(&format!(
                "⚠️  {} v{}: stale, version {} is already published",
                scope, version, published_version
            )),
            Ok(ApplyOutcome::Cancelled { .. }) => self
                .progress_reporter
                .report_error(&format!("⚠️  {} v{}: cancelled", scope, version)),
            Err(error) => self.progress_reporter.report_error(&format!(
                "❌ {} v{}: batch rejected\n{}",
                scope, version, error
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{DependencyBatch, DependencyChange, ScenarioScope};
    use crate::application::factories::PipelineFactory;
    use crate::application::use_cases::DependencySnapshotEngine;
    use crate::dependencies::domain::{DependencyId, DependencyModel};
    use crate::dependencies::providers::ProviderRegistry;
    use crate::dependencies::services::IconSetCache;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockProgressReporter {
        errors: RefCell<Vec<String>>,
        progress: RefCell<Vec<(usize, usize)>>,
    }

    impl ProgressReporter for MockProgressReporter {
        fn report(&self, _message: &str) {}

        fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
            self.progress.borrow_mut().push((current, total));
        }

        fn report_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }

        fn report_completion(&self, _message: &str) {}
    }

    fn use_case() -> ReplayScenarioUseCase<DependencySnapshotEngine, MockProgressReporter> {
        let icon_cache = Arc::new(IconSetCache::new());
        let pipeline = PipelineFactory::create(icon_cache.clone(), &[]).unwrap();
        let engine =
            DependencySnapshotEngine::new(pipeline, ProviderRegistry::with_builtin_providers(), icon_cache);
        ReplayScenarioUseCase::new(engine, MockProgressReporter::default())
    }

    fn add(provider: &str, id: &str, resolved: bool) -> DependencyChange {
        DependencyChange::add(DependencyModel::new(provider, id, resolved))
    }

    fn scenario() -> Scenario {
        Scenario {
            scopes: vec![
                ScenarioScope {
                    scope: ScopeId::new("net8.0"),
                    batches: vec![
                        DependencyBatch::new(1, vec![add("Sdk", "Microsoft.NET.Sdk.Web", false)]),
                        DependencyBatch::new(2, vec![add("Unknown", "x", true)]),
                        DependencyBatch::new(3, vec![add("Package", "Microsoft.NET.Sdk.Web", true)]),
                        DependencyBatch::new(2, vec![]),
                    ],
                },
                ScenarioScope {
                    scope: ScopeId::new("net472"),
                    batches: vec![DependencyBatch::new(1, vec![add("Assembly", "System.Xml", true)])],
                },
            ],
        }
    }

    #[test]
    fn test_replay_continues_after_rejection() {
        let use_case = use_case();
        let report = use_case.execute(scenario(), None).unwrap();

        assert_eq!(report.batches.len(), 5);
        assert!(report.has_rejections());
        let (rejected, error) = report.rejected().next().unwrap();
        assert_eq!(rejected.version, 2);
        assert!(matches!(error, SnapshotError::UnknownProvider { .. }));

        assert_eq!(report.snapshots.len(), 2);
        let net8 = &report.snapshots[0];
        assert_eq!(net8.version(), 3);
        assert!(net8
            .get(&DependencyId::new("Sdk", "Microsoft.NET.Sdk.Web"))
            .unwrap()
            .resolved());

        let errors = use_case.progress_reporter.errors.borrow();
        assert_eq!(errors.len(), 2);
        assert!(errors[1].contains("stale"));
        assert_eq!(*use_case.progress_reporter.progress.borrow().last().unwrap(), (5, 5));
    }

    #[test]
    fn test_replay_single_scope_output() {
        let report = use_case()
            .execute(scenario(), Some(&ScopeId::new("net472")))
            .unwrap();

        assert_eq!(report.snapshots.len(), 1);
        assert_eq!(report.snapshots[0].scope().as_str(), "net472");
        assert_eq!(report.batches.len(), 1);
    }

    #[test]
    fn test_replay_skips_rejections_in_other_scopes() {
        let use_case = use_case();
        let report = use_case
            .execute(scenario(), Some(&ScopeId::new("net472")))
            .unwrap();

        assert!(!report.has_rejections());
        assert!(use_case.progress_reporter.errors.borrow().is_empty());
        assert_eq!(*use_case.progress_reporter.progress.borrow(), vec![(1, 1)]);
        assert_eq!(use_case.engine().scopes(), vec![ScopeId::new("net472")]);
    }

    #[test]
    fn test_replay_unknown_scope_filter() {
        let error = use_case()
            .execute(scenario(), Some(&ScopeId::new("net6.0")))
            .unwrap_err()
            .to_string();
        assert!(error.contains("net6.0"));
    }
}
