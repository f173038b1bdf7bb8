use std::fmt;

/// Package manager dialect a package was resolved by.
///
/// npm, yarn and pnpm lockfiles all describe packages from the npm registry,
/// so they share one ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ecosystem {
    #[default]
    Npm,
}

impl Ecosystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "npm",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dependency edge as declared by its parent package.
///
/// `version` is the declared range or pin (`^1.2.0`, `npm:foo@1`, a git URL),
/// not necessarily the version that was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dependency {
    pub name: String,
    pub version: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// One resolved package as it appears in a lockfile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDetails {
    pub name: String,
    pub version: String,
    /// VCS ref the package is pinned to, when it was not resolved from a registry
    pub commit: Option<String>,
    pub ecosystem: Ecosystem,
    pub compare_as: Ecosystem,
    pub dependencies: Vec<Dependency>,
}

impl PackageDetails {
    /// Creates an npm-ecosystem package with no commit and no dependencies
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            commit: None,
            ecosystem: Ecosystem::Npm,
            compare_as: Ecosystem::Npm,
            dependencies: Vec::new(),
        }
    }

    pub fn with_commit(mut self, commit: Option<String>) -> Self {
        self.commit = commit.filter(|c| !c.is_empty());
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<Dependency>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Identity used to dedup resolved packages: `name@commit` when pinned
    /// to a VCS ref, `name@version` otherwise.
    pub fn identity(&self) -> String {
        match &self.commit {
            Some(commit) => format!("{}@{}", self.name, commit),
            None => format!("{}@{}", self.name, self.version),
        }
    }
}

/// Sorts parser output by name, then version, keeping lockfile order for ties.
///
/// Graph lookups return the first package with a given name, so a stable
/// order here is what makes closures reproducible between runs.
pub fn sort_packages(packages: &mut [PackageDetails]) {
    packages.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.version.cmp(&b.version)));
}
