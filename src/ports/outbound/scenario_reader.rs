use crate::application::dto::Scenario;
use crate::shared::Result;
use std::path::Path;

/// ScenarioReader port for loading recorded batch streams
pub trait ScenarioReader {
    /// Reads and parses the scenario at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist, is a symlink or is not a regular file
    /// - The file exceeds the size limit
    /// - The content is not a valid scenario
    fn read_scenario(&self, path: &Path) -> Result<Scenario>;
}
