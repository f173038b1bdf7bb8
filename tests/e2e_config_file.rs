/// End-to-end tests for config file loading and CLI option merging.
///
/// Each test copies a fixture lockfile into an isolated temp directory. Config
/// is only honored when passed with `--config`.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy the yarn fixture into `dir`, returning the lockfile path.
fn create_test_plugin(dir: &Path) -> PathBuf {
    let lockfile = dir.join("yarn.lock");
    fs::copy(fixtures_path().join("yarn/yarn.lock"), &lockfile).unwrap();
    lockfile
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn results_path() -> PathBuf {
    fixtures_path().join("osv-results.json")
}

// ============================================================================
// Plugin-Shipped Config Tests
// ============================================================================

mod plugin_shipped_config_tests {
    use super::*;

    #[test]
    fn test_config_next_to_lockfile_is_ignored() {
        let dir = TempDir::new().unwrap();
        let lockfile = create_test_plugin(dir.path());

        write_config(
            &dir.path().join("plugin-osv-filter.config.yml"),
            r#"suppressed_packages:
  - package: body-parser@1.20.1
  - package: express@4.18.2
fail_on_findings: false
"#,
        );

        cargo_bin_cmd!("plugin-osv-filter")
            .arg("-l")
            .arg(&lockfile)
            .arg("-r")
            .arg(results_path())
            .assert()
            .success()
            .stdout(predicate::str::contains("\"body-parser\""))
            .stdout(predicate::str::contains("\"express\""))
            .stderr(predicate::str::contains("2 kept, 0 suppressed"));
    }

    #[test]
    fn test_broken_config_next_to_lockfile_does_not_abort() {
        let dir = TempDir::new().unwrap();
        let lockfile = create_test_plugin(dir.path());

        write_config(
            &dir.path().join("plugin-osv-filter.config.yml"),
            "suppressed_packages: [unclosed\n",
        );

        cargo_bin_cmd!("plugin-osv-filter")
            .arg("-l")
            .arg(&lockfile)
            .arg("-r")
            .arg(results_path())
            .assert()
            .code(0)
            .stdout(predicate::str::contains("\"express\""));
    }
}

// ============================================================================
// Explicit --config Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_applies_suppressions() {
        let dir = TempDir::new().unwrap();
        let lockfile = create_test_plugin(dir.path());
        let config = dir.path().join("operator.yml");
        write_config(
            &config,
            r#"suppressed_packages:
  - package: body-parser@1.20.1
    reason: "Only reachable from the dev server"
"#,
        );

        cargo_bin_cmd!("plugin-osv-filter")
            .arg("-l")
            .arg(&lockfile)
            .arg("-r")
            .arg(results_path())
            .arg("--config")
            .arg(&config)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"body-parser\"").not())
            .stdout(predicate::str::contains("\"express\""))
            .stderr(predicate::str::contains("1 kept, 1 suppressed"));
    }

    #[test]
    fn test_suppression_requires_exact_version() {
        let dir = TempDir::new().unwrap();
        let lockfile = create_test_plugin(dir.path());
        let config = dir.path().join("operator.yml");
        write_config(&config, "suppressed_packages:\n  - package: body-parser@1.20.2\n");

        cargo_bin_cmd!("plugin-osv-filter")
            .arg("-l")
            .arg(&lockfile)
            .arg("-r")
            .arg(results_path())
            .arg("--config")
            .arg(&config)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"body-parser\""));
    }

    #[test]
    fn test_explicit_config_not_found() {
        let dir = TempDir::new().unwrap();
        let lockfile = create_test_plugin(dir.path());

        cargo_bin_cmd!("plugin-osv-filter")
            .arg("-l")
            .arg(&lockfile)
            .arg("-r")
            .arg(results_path())
            .arg("--config")
            .arg(dir.path().join("missing.yml"))
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_invalid_yaml_fails() {
        let dir = TempDir::new().unwrap();
        let lockfile = create_test_plugin(dir.path());
        let config = dir.path().join("operator.yml");
        write_config(&config, "suppressed_packages: [unclosed\n");

        cargo_bin_cmd!("plugin-osv-filter")
            .arg("-l")
            .arg(&lockfile)
            .arg("-r")
            .arg(results_path())
            .arg("--config")
            .arg(&config)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_suppression_without_version_fails() {
        let dir = TempDir::new().unwrap();
        let lockfile = create_test_plugin(dir.path());
        let config = dir.path().join("operator.yml");
        write_config(&config, "suppressed_packages:\n  - package: minimist\n");

        cargo_bin_cmd!("plugin-osv-filter")
            .arg("-l")
            .arg(&lockfile)
            .arg("-r")
            .arg(results_path())
            .arg("--config")
            .arg(&config)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("suppressed_packages[0].package"));
    }

    #[test]
    fn test_unknown_field_warns() {
        let dir = TempDir::new().unwrap();
        let lockfile = create_test_plugin(dir.path());
        let config = dir.path().join("operator.yml");
        write_config(&config, "trusted_packages:\n  - lodash\n");

        cargo_bin_cmd!("plugin-osv-filter")
            .arg("-l")
            .arg(&lockfile)
            .arg("-r")
            .arg(results_path())
            .arg("--config")
            .arg(&config)
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'trusted_packages' will be ignored",
            ));
    }
}

// ============================================================================
// fail_on_findings Merging Tests
// ============================================================================

mod fail_on_findings_tests {
    use super::*;

    #[test]
    fn test_config_enables_fail_on_findings() {
        let dir = TempDir::new().unwrap();
        let lockfile = create_test_plugin(dir.path());
        let config = dir.path().join("operator.yml");
        write_config(&config, "fail_on_findings: true\n");

        cargo_bin_cmd!("plugin-osv-filter")
            .arg("-l")
            .arg(&lockfile)
            .arg("-r")
            .arg(results_path())
            .arg("--config")
            .arg(&config)
            .assert()
            .code(1);
    }

    #[test]
    fn test_no_findings_left_succeeds() {
        let dir = TempDir::new().unwrap();
        let lockfile = create_test_plugin(dir.path());
        let config = dir.path().join("operator.yml");
        write_config(
            &config,
            r#"fail_on_findings: true
suppressed_packages:
  - package: body-parser@1.20.1
  - package: express@4.18.2
"#,
        );

        cargo_bin_cmd!("plugin-osv-filter")
            .arg("-l")
            .arg(&lockfile)
            .arg("-r")
            .arg(results_path())
            .arg("--config")
            .arg(&config)
            .assert()
            .code(0)
            .stderr(predicate::str::contains("0 kept, 2 suppressed"));
    }
}
