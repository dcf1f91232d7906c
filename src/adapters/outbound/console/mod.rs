/// Console adapters writing to stderr or the tracing subscriber
mod progress_reporter;
mod tracing_listener;

pub use progress_reporter::StderrProgressReporter;
pub use tracing_listener::TracingSnapshotListener;
