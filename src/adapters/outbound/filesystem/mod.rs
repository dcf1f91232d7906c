/// Filesystem adapters for reading scenarios and writing output
mod file_writer;
mod scenario_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use scenario_reader::FileSystemScenarioReader;
