/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, subscribers).
pub mod output_presenter;
pub mod progress_reporter;
pub mod scenario_reader;
pub mod snapshot_formatter;
pub mod snapshot_listener;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use scenario_reader::ScenarioReader;
pub use snapshot_formatter::SnapshotFormatter;
pub use snapshot_listener::SnapshotListener;
