use crate::application::dto::Scenario;
use crate::ports::outbound::ScenarioReader;
use crate::shared::error::CliError;
use crate::shared::security::{read_input_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use std::collections::HashSet;
use std::path::Path;

/// FileSystemScenarioReader adapter for reading YAML scenarios from disk
pub struct FileSystemScenarioReader {
    max_size: u64,
}

impl FileSystemScenarioReader {
    pub fn new() -> Self {
        Self {
            max_size: MAX_INPUT_FILE_SIZE,
        }
    }

    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    fn validate(scenario: &Scenario) -> std::result::Result<(), CliError> {
        let mut seen = HashSet::new();
        for scope in &scenario.scopes {
            if scope.scope.as_str().trim().is_empty() {
                return Err(CliError::InvalidScenario {
                    reason: "scope names must not be empty".to_string(),
                });
            }
            if !seen.insert(&scope.scope) {
                return Err(CliError::InvalidScenario {
                    reason: format!(
                        "scope '{}' is listed more than once; merge its batches into one entry",
                        scope.scope
                    ),
                });
            }
        }
        Ok(())
    }
}

impl Default for FileSystemScenarioReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioReader for FileSystemScenarioReader {
    fn read_scenario(&self, path: &Path) -> Result<Scenario> {
        if !path.exists() {
            return Err(CliError::ScenarioNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass the path of a scenario YAML file as the first argument"
                    .to_string(),
            }
            .into());
        }

        let content = read_input_file(path, "scenario", self.max_size)?;
        let scenario: Scenario =
            serde_yaml_ng::from_str(&content).map_err(|e| CliError::ScenarioParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        Self::validate(&scenario)?;

        tracing::debug!(
            target: "depsnap::scenario",
            path = %path.display(),
            scopes = scenario.scopes.len(),
            batches = scenario.batch_count(),
            "Scenario loaded"
        );
        Ok(scenario)
    }
}
