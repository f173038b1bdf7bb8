use super::commit::try_extract_commit;
use crate::dependency_attribution::domain::{
    sort_packages, Dependency, LockfileKind, PackageDetails,
};
use crate::ports::outbound::LockfileParser;
use crate::shared::error::FilterError;
use crate::shared::Result;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Top level of `package-lock.json` / `npm-shrinkwrap.json`
///
/// Entries stay untyped here so one malformed record cannot fail the whole
/// document; each is decoded on its own later.
#[derive(Debug, Deserialize)]
struct NpmLockfile {
    #[serde(rename = "lockfileVersion", default)]
    lockfile_version: Option<Value>,
    /// npm 7+ ("packages" keyed by install path)
    #[serde(default)]
    packages: Option<Map<String, Value>>,
    /// npm 6 and older (nested "dependencies" tree)
    #[serde(default)]
    dependencies: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct NpmLockPackage {
    #[serde(default)]
    version: String,
    #[serde(default)]
    resolved: String,
    #[serde(default)]
    dependencies: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct NpmLockDependency {
    #[serde(default)]
    version: String,
    #[serde(default)]
    requires: Map<String, Value>,
    #[serde(default)]
    dependencies: Map<String, Value>,
}

/// NpmLockParser adapter for npm lockfiles in both shapes
pub struct NpmLockParser;

impl NpmLockParser {
    pub fn new() -> Self {
        Self
    }

    /// `node_modules/a/node_modules/@scope/b` -> `@scope/b`
    fn extract_name(install_path: &str) -> String {
        let mut segments = install_path.rsplit('/');
        let name = segments.next().unwrap_or_default();

        match segments.next() {
            Some(scope) if scope.starts_with('@') => format!("{}/{}", scope, name),
            _ => name.to_string(),
        }
    }

    fn string_edges(map: &Map<String, Value>) -> impl Iterator<Item = Dependency> + '_ {
        map.iter().filter_map(|(name, range)| {
            range.as_str().map(|range| Dependency::new(name.as_str(), range))
        })
    }

    fn parse_packages(packages: &Map<String, Value>) -> BTreeMap<String, PackageDetails> {
        let mut details = BTreeMap::new();

        for (install_path, raw) in packages {
            // the root project itself
            if install_path.is_empty() {
                continue;
            }

            let entry: NpmLockPackage = match serde_json::from_value(raw.clone()) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(entry = %install_path, "skipping malformed npm package entry: {}", e);
                    continue;
                }
            };

            let name = Self::extract_name(install_path);
            let package = PackageDetails::new(name, entry.version)
                .with_commit(try_extract_commit(&entry.resolved))
                .with_dependencies(Self::string_edges(&entry.dependencies).collect());
            details.insert(package.identity(), package);
        }

        details
    }

    /// Flattens the legacy tree; packages nested at any depth join the
    /// same result set.
    fn parse_dependencies(
        dependencies: &Map<String, Value>,
        details: &mut BTreeMap<String, PackageDetails>,
    ) {
        for (name, raw) in dependencies {
            let entry: NpmLockDependency = match serde_json::from_value(raw.clone()) {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(entry = %name, "skipping malformed npm dependency entry: {}", e);
                    continue;
                }
            };

            Self::parse_dependencies(&entry.dependencies, details);

            let mut edges: Vec<Dependency> = Self::string_edges(&entry.requires).collect();
            for (nested_name, nested) in &entry.dependencies {
                if edges.iter().any(|e| &e.name == nested_name) {
                    continue;
                }
                let nested_version = nested
                    .get("version")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                edges.push(Dependency::new(nested_name.as_str(), nested_version));
            }

            // a file: link carries no version we can resolve
            let (version, commit) = if entry.version.starts_with("file:") {
                (String::new(), None)
            } else {
                match try_extract_commit(&entry.version) {
                    Some(commit) => (String::new(), Some(commit)),
                    None => (entry.version.clone(), None),
                }
            };

            let package = PackageDetails::new(name.as_str(), version)
                .with_commit(commit)
                .with_dependencies(edges);
            details.insert(package.identity(), package);
        }
    }
}

impl Default for NpmLockParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileParser for NpmLockParser {
    fn kind(&self) -> LockfileKind {
        LockfileKind::Npm
    }

    fn parse(&self, content: &str) -> Result<Vec<PackageDetails>> {
        let lockfile: NpmLockfile =
            serde_json::from_str(content).map_err(|e| FilterError::LockfileDecodeError {
                kind: self.kind().file_name().to_string(),
                details: e.to_string(),
            })?;

        let details = match (&lockfile.packages, &lockfile.dependencies) {
            (Some(packages), _) => Self::parse_packages(packages),
            (None, Some(dependencies)) => {
                let mut details = BTreeMap::new();
                Self::parse_dependencies(dependencies, &mut details);
                details
            }
            (None, None) => BTreeMap::new(),
        };

        let mut packages: Vec<PackageDetails> = details.into_values().collect();
        sort_packages(&mut packages);

        tracing::debug!(
            lockfile_version = ?lockfile.lockfile_version,
            packages = packages.len(),
            "parsed npm lockfile"
        );
        Ok(packages)
    }
}
