/// Mock implementations for testing
mod faulty_filter;
mod mock_progress_reporter;
mod recording_listener;

pub use faulty_filter::{FaultMode, FaultyFilter};
pub use mock_progress_reporter::MockProgressReporter;
pub use recording_listener::RecordingListener;
