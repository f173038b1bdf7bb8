use super::commit::CODELOAD_TARBALL;
use crate::dependency_attribution::domain::{
    sort_packages, Dependency, LockfileKind, PackageDetails,
};
use crate::ports::outbound::LockfileParser;
use crate::shared::error::FilterError;
use crate::shared::regex_cache::{capture, is_match};
use crate::shared::Result;
use serde::{Deserialize, Deserializer};
use serde_yaml_ng::{Mapping, Value};
use std::collections::HashMap;

/// `name@version` where the name itself may contain `@`
const NAME_AT_VERSION: &str = r"^(.+)@(\d[0-9A-Za-z.+\-]*)$";
const STARTS_WITH_DIGIT: &str = r"^\d";

#[derive(Debug, Deserialize)]
struct PnpmLockfile {
    #[serde(
        rename = "lockfileVersion",
        default,
        deserialize_with = "deserialize_lockfile_version"
    )]
    lockfile_version: Option<f64>,
    #[serde(default)]
    packages: Option<Mapping>,
    /// pnpm 9 moved dependency edges out of `packages` into here
    #[serde(default)]
    snapshots: Option<Mapping>,
}

/// `lockfileVersion` is a number up to v5 and a string from v6 on
fn deserialize_lockfile_version<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawVersion {
        Number(f64),
        Text(String),
    }

    match Option::<RawVersion>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawVersion::Number(version)) => Ok(Some(version)),
        Some(RawVersion::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid lockfileVersion '{}'", text))),
    }
}

#[derive(Debug, Default, Deserialize)]
struct PnpmResolution {
    #[serde(default)]
    tarball: String,
    #[serde(default)]
    commit: String,
}

#[derive(Debug, Deserialize)]
struct PnpmLockPackage {
    #[serde(default)]
    resolution: PnpmResolution,
    #[serde(default)]
    name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    dependencies: Mapping,
}

#[derive(Debug, Deserialize)]
struct PnpmSnapshot {
    #[serde(default)]
    dependencies: Mapping,
}

/// PnpmLockParser adapter for `pnpm-lock.yaml` (v5 through v9)
pub struct PnpmLockParser;

impl PnpmLockParser {
    pub fn new() -> Self {
        Self
    }

    /// Recovers `(name, version)` from a dependency path key
    ///
    /// Accepts `/name/1.2.3_peer` (v5), `/@scope/name@1.2.3(peer@1)` (v6) and
    /// `name@1.2.3` (v9). Returns `None` unless both parts are found and the
    /// version starts with a digit.
    fn extract_name_and_version(key: &str) -> Option<(String, String)> {
        // file: dependencies only ever carry explicit name/version fields
        if key.starts_with("file:") {
            return None;
        }

        let path = Self::strip_peer_suffix(key.strip_prefix('/').unwrap_or(key));
        let mut parts = path.split('/');
        let first = parts.next()?;

        let name = if first.starts_with('@') {
            format!("{}/{}", first, parts.next()?)
        } else {
            first.to_string()
        };

        let (name, version) = match parts.next().filter(|v| !v.is_empty()) {
            Some(version) => (name, version.to_string()),
            None => Self::parse_name_at_version(&name)?,
        };

        if !is_match(STARTS_WITH_DIGIT, &version) {
            return None;
        }

        let version = version.split('_').next().unwrap_or_default().to_string();
        Some((name, version))
    }

    fn parse_name_at_version(value: &str) -> Option<(String, String)> {
        let name = capture(NAME_AT_VERSION, value, 1)?;
        let version = capture(NAME_AT_VERSION, value, 2)?;
        Some((name, version))
    }

    /// `name@1.2.3(react@18.2.0)` -> `name@1.2.3`
    fn strip_peer_suffix(key: &str) -> &str {
        key.split('(').next().unwrap_or(key)
    }

    fn scalar(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn edges(mapping: &Mapping) -> Vec<Dependency> {
        mapping
            .iter()
            .filter_map(|(name, range)| {
                Some(Dependency::new(name.as_str()?, Self::scalar(range)?))
            })
            .collect()
    }

    /// Snapshot edges keyed by the peer-stripped package key
    fn snapshot_edges(snapshots: &Mapping) -> HashMap<String, Vec<Dependency>> {
        let mut edges: HashMap<String, Vec<Dependency>> = HashMap::new();

        for (key, raw) in snapshots {
            let Some(key) = key.as_str() else { continue };
            let snapshot: PnpmSnapshot = match serde_yaml_ng::from_value(raw.clone()) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    tracing::debug!(entry = %key, "skipping malformed pnpm snapshot: {}", e);
                    continue;
                }
            };

            let merged = edges
                .entry(Self::strip_peer_suffix(key).to_string())
                .or_default();
            for dependency in Self::edges(&snapshot.dependencies) {
                if !merged.iter().any(|d| d.name == dependency.name) {
                    merged.push(dependency);
                }
            }
        }

        edges
    }

    fn extract_commit(resolution: &PnpmResolution) -> Option<String> {
        if resolution.tarball.starts_with("https://codeload.github.com") {
            if let Some(commit) = capture(CODELOAD_TARBALL, &resolution.tarball, 1) {
                return Some(commit);
            }
        }
        Some(resolution.commit.clone())
    }

    fn parse_package(
        key: &str,
        raw: &Value,
        snapshots: &HashMap<String, Vec<Dependency>>,
    ) -> Option<PackageDetails> {
        let entry: PnpmLockPackage = match serde_yaml_ng::from_value(raw.clone()) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(entry = %key, "skipping malformed pnpm package: {}", e);
                return None;
            }
        };

        let (mut name, mut version) = Self::extract_name_and_version(key).unwrap_or_default();

        // explicit fields only appear when the key does not encode them
        if !entry.name.is_empty() {
            name = entry.name.clone();
        }
        if !entry.version.is_empty() {
            version = entry.version.clone();
        }

        if name.is_empty() || version.is_empty() {
            tracing::debug!(entry = %key, "skipping pnpm package without name or version");
            return None;
        }

        let mut dependencies = Self::edges(&entry.dependencies);
        if let Some(extra) = snapshots.get(Self::strip_peer_suffix(key.trim_start_matches('/'))) {
            for dependency in extra {
                if !dependencies.iter().any(|d| d.name == dependency.name) {
                    dependencies.push(dependency.clone());
                }
            }
        }

        Some(
            PackageDetails::new(name, version)
                .with_commit(Self::extract_commit(&entry.resolution))
                .with_dependencies(dependencies),
        )
    }
}

impl Default for PnpmLockParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileParser for PnpmLockParser {
    fn kind(&self) -> LockfileKind {
        LockfileKind::Pnpm
    }

    fn parse(&self, content: &str) -> Result<Vec<PackageDetails>> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let lockfile: PnpmLockfile =
            serde_yaml_ng::from_str(content).map_err(|e| FilterError::LockfileDecodeError {
                kind: self.kind().file_name().to_string(),
                details: e.to_string(),
            })?;

        let snapshots = lockfile
            .snapshots
            .as_ref()
            .map(Self::snapshot_edges)
            .unwrap_or_default();

        let mut packages: Vec<PackageDetails> = lockfile
            .packages
            .iter()
            .flatten()
            .filter_map(|(key, raw)| Self::parse_package(key.as_str()?, raw, &snapshots))
            .collect();

        sort_packages(&mut packages);

        tracing::debug!(
            lockfile_version = ?lockfile.lockfile_version,
            packages = packages.len(),
            "parsed pnpm-lock.yaml"
        );
        Ok(packages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Vec<PackageDetails> {
        PnpmLockParser::new().parse(content).unwrap()
    }

    fn ids(packages: &[PackageDetails]) -> Vec<String> {
        packages
            .iter()
            .map(|p| format!("{}@{}", p.name, p.version))
            .collect()
    }

    #[test]
    fn test_extract_name_and_version_shapes() {
        let extract = PnpmLockParser::extract_name_and_version;

        assert_eq!(extract("/acorn/8.7.0"), Some(("acorn".into(), "8.7.0".into())));
        assert_eq!(
            extract("/@babel/core/7.18.0_supports-color@8.1.1"),
            Some(("@babel/core".into(), "7.18.0".into()))
        );
        assert_eq!(
            extract("/@grafana/data@10.0.0(react@18.2.0)"),
            Some(("@grafana/data".into(), "10.0.0".into()))
        );
        assert_eq!(
            extract("moment@2.29.4"),
            Some(("moment".into(), "2.29.4".into()))
        );
        assert_eq!(
            extract("@grafana/ui@10.0.0-cloud.1(@types/react@18.2.0)"),
            Some(("@grafana/ui".into(), "10.0.0-cloud.1".into()))
        );
    }

    #[test]
    fn test_extract_name_and_version_rejects() {
        let extract = PnpmLockParser::extract_name_and_version;

        assert_eq!(extract("file:projects/foo"), None);
        assert_eq!(extract("/"), None);
        assert_eq!(extract("/@scope"), None);
        assert_eq!(extract("/nameless/not-a-version"), None);
        assert_eq!(extract("/github.com/org/repo/abc"), None);
    }

    #[test]
    fn test_lockfile_version_number_or_string() {
        for content in ["lockfileVersion: 5.4\n", "lockfileVersion: '6.0'\n", "lockfileVersion: 9\n"] {
            let lockfile: PnpmLockfile = serde_yaml_ng::from_str(content).unwrap();
            assert!(lockfile.lockfile_version.is_some());
        }

        let lockfile: PnpmLockfile = serde_yaml_ng::from_str("lockfileVersion: '6.0'\n").unwrap();
        assert_eq!(lockfile.lockfile_version, Some(6.0));
    }

    #[test]
    fn test_lockfile_version_garbage_fails() {
        let err = PnpmLockParser::new()
            .parse("lockfileVersion: 'six'\npackages: {}\n")
            .unwrap_err();
        assert!(err.downcast_ref::<FilterError>().is_some());
    }

    #[test]
    fn test_parse_v5_with_dependencies() {
        let content = r#"lockfileVersion: 5.4

specifiers:
  '@grafana/data': 10.0.0

dependencies:
  '@grafana/data': 10.0.0

packages:

  /@grafana/data/10.0.0:
    resolution: {integrity: sha512-aaa}
    dependencies:
      moment: 2.29.4
      tslib: 2.5.0
    dev: false

  /moment/2.29.4:
    resolution: {integrity: sha512-bbb}
    dev: false

  /tslib/2.5.0:
    resolution: {integrity: sha512-ccc}
    dev: false
"#;
        let packages = parse(content);
        assert_eq!(
            ids(&packages),
            vec!["@grafana/data@10.0.0", "moment@2.29.4", "tslib@2.5.0"]
        );
        assert_eq!(
            packages[0].dependencies,
            vec![
                Dependency::new("moment", "2.29.4"),
                Dependency::new("tslib", "2.5.0"),
            ]
        );
    }

    #[test]
    fn test_parse_v9_dependencies_from_snapshots() {
        let content = r#"lockfileVersion: '9.0'

packages:

  '@grafana/runtime@10.0.0':
    resolution: {integrity: sha512-aaa}

  systemjs@0.20.19:
    resolution: {integrity: sha512-bbb}

snapshots:

  '@grafana/runtime@10.0.0(react@18.2.0)':
    dependencies:
      systemjs: 0.20.19

  systemjs@0.20.19: {}
"#;
        let packages = parse(content);
        assert_eq!(
            ids(&packages),
            vec!["@grafana/runtime@10.0.0", "systemjs@0.20.19"]
        );
        assert_eq!(
            packages[0].dependencies,
            vec![Dependency::new("systemjs", "0.20.19")]
        );
    }

    #[test]
    fn test_parse_corrupted_keeps_valid_entries() {
        let content = r#"lockfileVersion: 5.4

packages:

  /wrappy/1.0.2:
    resolution: {integrity: sha512-aaa}

  /:
    resolution: {integrity: sha512-bbb}

  /@scope:
    resolution: {integrity: sha512-ccc}

  /nameless/not-a-version:
    resolution: {integrity: sha512-ddd}

  file:projects/unnamed:
    resolution: {directory: projects/unnamed, type: directory}

  /broken/1.0.0: just a string

  /acorn/8.7.0:
    resolution: {integrity: sha512-eee}
"#;
        let packages = parse(content);
        assert_eq!(ids(&packages), vec!["acorn@8.7.0", "wrappy@1.0.2"]);
    }

    #[test]
    fn test_explicit_fields_override_key() {
        let content = r#"lockfileVersion: 5.4
packages:
  file:projects/local:
    resolution: {directory: projects/local, type: directory}
    name: local-lib
    version: 0.0.1
"#;
        let packages = parse(content);
        assert_eq!(ids(&packages), vec!["local-lib@0.0.1"]);
    }

    #[test]
    fn test_commit_from_resolution() {
        let content = r#"lockfileVersion: 5.4
packages:
  github.com/org/from-commit/abc:
    resolution: {commit: 0f1e2d3c, repo: https://github.com/org/from-commit.git, type: git}
    name: from-commit
    version: 1.0.0
  codeload.github.com/org/from-tarball/abc:
    resolution: {tarball: https://codeload.github.com/org/from-tarball/tar.gz/9a8b7c6d}
    name: from-tarball
    version: 2.0.0
  /registry/3.0.0:
    resolution: {integrity: sha512-aaa}
"#;
        let packages = parse(content);
        assert_eq!(packages[0].name, "from-commit");
        assert_eq!(packages[0].commit.as_deref(), Some("0f1e2d3c"));
        assert_eq!(packages[1].name, "from-tarball");
        assert_eq!(packages[1].commit.as_deref(), Some("9a8b7c6d"));
        assert_eq!(packages[2].name, "registry");
        assert_eq!(packages[2].commit, None);
    }

    #[test]
    fn test_parse_invalid_yaml_fails() {
        let err = PnpmLockParser::new().parse("packages: [unclosed").unwrap_err();
        let err = err.downcast_ref::<FilterError>().unwrap();
        assert!(matches!(err, FilterError::LockfileDecodeError { kind, .. } if kind == "pnpm-lock.yaml"));
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse("").is_empty());
        assert!(parse("lockfileVersion: '6.0'\n").is_empty());
    }
}
