mod cli;

use cli::Args;
use depsnap::adapters::outbound::console::{StderrProgressReporter, TracingSnapshotListener};
use depsnap::adapters::outbound::filesystem::FileSystemScenarioReader;
use depsnap::application::dto::OutputFormat;
use depsnap::application::factories::{FormatterFactory, PipelineFactory, PresenterFactory};
use depsnap::application::use_cases::{DependencySnapshotEngine, ReplayScenarioUseCase};
use depsnap::config::{discover_config, load_config_from_path, Settings};
use depsnap::dependencies::domain::ScopeId;
use depsnap::dependencies::providers::ProviderRegistry;
use depsnap::dependencies::services::IconSetCache;
use depsnap::ports::outbound::ScenarioReader;
use depsnap::shared::error::ExitCode;
use depsnap::shared::{enable_tracing_by_env, Result};
use std::io::IsTerminal;
use std::path::Path;
use std::process;
use std::sync::Arc;

fn main() {
    enable_tracing_by_env();

    let exit_code = match run() {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }
            eprintln!();
            ExitCode::ApplicationError
        }
    };
    process::exit(exit_code.as_i32());
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(scenario_dir(&args.scenario))?,
    };
    let settings = Settings::resolve(args.format, args.scope.clone().map(ScopeId::new), config);

    let scenario = FileSystemScenarioReader::new().read_scenario(&args.scenario)?;

    let icon_cache = Arc::new(IconSetCache::new());
    let pipeline = PipelineFactory::create(icon_cache.clone(), &settings.disabled_filters)?;
    let engine = DependencySnapshotEngine::new(
        pipeline,
        ProviderRegistry::with_builtin_providers(),
        icon_cache,
    )
    .with_listener(TracingSnapshotListener);

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let use_case = ReplayScenarioUseCase::new(engine, progress_reporter);
    let report = use_case.execute(scenario, settings.scope.as_ref())?;

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }
    let colored = settings.format == OutputFormat::Text
        && args.output.is_none()
        && std::io::stdout().is_terminal();
    let formatter = FormatterFactory::create(settings.format, colored);
    let mut output = formatter.format(&report.snapshots)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }

    PresenterFactory::create(args.output.into()).present(&output)?;

    if report.has_rejections() {
        Ok(ExitCode::BatchRejected)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Directory searched for `depsnap.config.yml` when `--config` is not given.
fn scenario_dir(scenario: &Path) -> &Path {
    scenario
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}
