/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn run_json(args: &[&str]) -> serde_json::Value {
    let output = cargo_bin_cmd!("depsnap")
        .args(args)
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).unwrap()
}

fn group<'a>(snapshot: &'a serde_json::Value, provider: &str) -> &'a serde_json::Value {
    snapshot["groups"]
        .as_array()
        .unwrap()
        .iter()
        .find(|group| group["provider"] == provider)
        .unwrap_or_else(|| panic!("group {provider} missing"))
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: every batch published or discarded as stale
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("depsnap")
            .arg(fixture("sdk_linking.yml"))
            .arg("--quiet")
            .assert()
            .code(0);
    }

    #[test]
    fn test_exit_code_help_and_version() {
        cargo_bin_cmd!("depsnap").arg("--help").assert().code(0);
        cargo_bin_cmd!("depsnap")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 1: a batch was rejected
    #[test]
    fn test_exit_code_batch_rejected() {
        cargo_bin_cmd!("depsnap")
            .arg(fixture("rejected_batch.yml"))
            .assert()
            .code(1)
            .stderr(predicate::str::contains("batch rejected"))
            .stderr(predicate::str::contains("Cargo"))
            .stderr(predicate::str::contains("stale"));
    }

    /// A rejection in a scope excluded by --scope does not affect the run
    #[test]
    fn test_scope_filter_skips_other_scopes_rejections() {
        cargo_bin_cmd!("depsnap")
            .arg(fixture("rejected_batch.yml"))
            .args(["--scope", "net472"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("System.Xml"))
            .stdout(predicate::str::contains("Newtonsoft.Json").not())
            .stderr(predicate::str::contains("batch rejected").not());
    }

    /// Exit code 2: invalid arguments
    #[test]
    fn test_exit_code_invalid_arguments() {
        cargo_bin_cmd!("depsnap").assert().code(2);
        cargo_bin_cmd!("depsnap")
            .args(["scenario.yml", "--format", "markdown"])
            .assert()
            .code(2);
    }

    /// Exit code 3: application error
    #[test]
    fn test_exit_code_missing_scenario() {
        cargo_bin_cmd!("depsnap")
            .arg("/nonexistent/scenario.yml")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Scenario file not found"));
    }

    #[test]
    fn test_exit_code_unknown_scope() {
        cargo_bin_cmd!("depsnap")
            .arg(fixture("sdk_linking.yml"))
            .args(["--scope", "net6.0"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("net6.0"));
    }
}

mod output_tests {
    use super::*;

    #[test]
    fn test_json_output_reflects_final_state() {
        let path = fixture("sdk_linking.yml");
        let json = run_json(&[path.to_str().unwrap(), "-q"]);

        assert_eq!(json["tool"]["name"], "depsnap");
        let snapshots = json["snapshots"].as_array().unwrap();
        assert_eq!(snapshots.len(), 2);

        let net8 = &snapshots[0];
        assert_eq!(net8["scope"], "net8.0");
        assert_eq!(net8["version"], 3);

        let sdk = &group(net8, "Sdk")["dependencies"][0];
        assert_eq!(sdk["id"], "Microsoft.NET.Sdk.Web");
        assert_eq!(sdk["resolved"], false);
        assert_eq!(sdk["diagnosticLevel"], "Warning");

        let packages = group(net8, "Package")["dependencies"].as_array().unwrap();
        let ids: Vec<&str> = packages.iter().map(|p| p["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["Newtonsoft.Json", "System.Text.Json"]);
        // Declared in batch 1's item specs, so only the second one is implicit.
        assert_eq!(packages[0]["implicit"], false);
        assert_eq!(packages[0]["properties"]["Version"], "13.0.3");
        assert_eq!(packages[1]["implicit"], true);

        let net472 = &snapshots[1];
        assert_eq!(net472["hasUnresolved"], true);
        assert_eq!(group(net472, "Framework")["hasUnresolved"], true);
    }

    #[test]
    fn test_scope_filter_and_text_format() {
        cargo_bin_cmd!("depsnap")
            .arg(fixture("sdk_linking.yml"))
            .args(["-f", "text", "-s", "net472", "-q"])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("net472 (version 1)\n"))
            .stdout(predicate::str::contains("System.Xml"))
            .stdout(predicate::str::contains("net8.0").not())
            .stdout(predicate::str::contains("\u{1b}[").not());
    }

    #[test]
    fn test_output_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("snapshots.json");

        cargo_bin_cmd!("depsnap")
            .arg(fixture("sdk_linking.yml"))
            .arg("-o")
            .arg(&output)
            .arg("-q")
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty());

        let content = std::fs::read_to_string(&output).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["snapshots"][0]["version"], 3);
    }

    #[test]
    fn test_tracing_env_var_emits_engine_logs() {
        cargo_bin_cmd!("depsnap")
            .arg(fixture("sdk_linking.yml"))
            .arg("-q")
            .env("DEPSNAP_LOG", "debug")
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Snapshot published"));
    }
}
