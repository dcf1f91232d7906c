use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Level;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable holding a level name (`debug`) or an `EnvFilter`
/// directive (`depsnap::pipeline=trace`).
pub const TRACE_ENV_VAR: &str = "DEPSNAP_LOG";

static IS_TRACING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Installs a stderr subscriber when [`TRACE_ENV_VAR`] is set. Only the first
/// call has an effect.
pub fn enable_tracing_by_env() {
    let Ok(trace_var) = std::env::var(TRACE_ENV_VAR) else {
        return;
    };

    if !IS_TRACING_ENABLED.swap(true, Ordering::SeqCst) {
        use tracing_subscriber::{fmt, prelude::*};

        let Some(layer) = filter_layer(&trace_var) else {
            eprintln!(
                "⚠️  Warning: Ignoring invalid {} directive '{}'.",
                TRACE_ENV_VAR, trace_var
            );
            return;
        };

        let installed = tracing_subscriber::registry()
            .with(layer)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init();
        if installed.is_ok() {
            tracing::trace!("enable_tracing_by_env");
        }
    }
}

fn filter_layer(
    trace_var: &str,
) -> Option<Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>> {
    if let Ok(default_level) = Level::from_str(trace_var) {
        return Some(
            tracing_subscriber::filter::Targets::new()
                .with_target("depsnap", default_level)
                .boxed(),
        );
    }

    EnvFilter::builder()
        .with_regex(true)
        .parse(trace_var)
        .ok()
        .map(|filter| filter.boxed())
}
