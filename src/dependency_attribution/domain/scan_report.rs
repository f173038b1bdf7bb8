//! Report shape produced by osv-scanner's `--json` output.
//!
//! The report is kept as the JSON object it was read from. Filtering only
//! removes entries from `results[].packages[]`; every other value, key order
//! included, is written back exactly as read.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level scanner report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanResults {
    document: Map<String, Value>,
}

/// Identity of one reported package, borrowed from its `package` object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageRef<'a> {
    pub name: &'a str,
    /// Empty when the entry carries no string version
    pub version: &'a str,
}

impl<'a> PackageRef<'a> {
    /// `None` when the entry has no string `package.name`
    fn from_entry(entry: &'a Value) -> Option<Self> {
        let package = entry.get("package")?;
        Some(Self {
            name: package.get("name")?.as_str()?,
            version: package
                .get("version")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        })
    }
}

impl ScanResults {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn entries(&self) -> impl Iterator<Item = &Value> {
        self.document
            .get("results")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|source| source.get("packages")?.as_array())
            .flatten()
    }

    /// Total number of package entries across all sources
    pub fn package_count(&self) -> usize {
        self.entries().count()
    }

    /// Identities of every named package entry, in report order
    pub fn packages(&self) -> impl Iterator<Item = PackageRef<'_>> {
        self.entries().filter_map(PackageRef::from_entry)
    }

    pub fn package_names(&self) -> Vec<&str> {
        self.packages().map(|package| package.name).collect()
    }

    /// Removes the package entries `keep` rejects.
    ///
    /// Entries without a package name are never passed to `keep` and always
    /// stay. Sources, including ones left empty, are never removed.
    pub fn retain_packages<F>(&mut self, mut keep: F)
    where
        F: FnMut(PackageRef<'_>) -> bool,
    {
        let Some(sources) = self.document.get_mut("results").and_then(Value::as_array_mut) else {
            return;
        };
        for source in sources {
            if let Some(packages) = source.get_mut("packages").and_then(Value::as_array_mut) {
                packages.retain(|entry| PackageRef::from_entry(entry).is_none_or(|p| keep(p)));
            }
        }
    }
}
