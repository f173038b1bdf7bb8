use crate::dependency_attribution::domain::{
    Dependency, DependencyState, PackageDetails, PackageFlattened,
};
use crate::shared::error::FilterError;
use std::collections::HashSet;

/// GraphExpander service computing cycle-safe transitive closures
///
/// Pure algorithm over an already-parsed package list. Visited state lives in
/// hash sets local to each call, never on the shared package data, so the
/// same list can be expanded from any number of callers at once.
pub struct GraphExpander;

impl GraphExpander {
    /// Finds a package by exact name
    ///
    /// When a lockfile resolves several versions of the same name, the first
    /// one in list order wins. Parsers sort their output, so this is the
    /// lowest version string.
    pub fn lookup<'a>(name: &str, packages: &'a [PackageDetails]) -> Option<&'a PackageDetails> {
        packages.iter().find(|p| p.name == name)
    }

    /// Returns `name`'s own declared edges, none of them processed yet
    ///
    /// # Errors
    /// `FilterError::PackageNotFound` when `name` is not in `packages`
    pub fn direct_dependencies(
        name: &str,
        packages: &[PackageDetails],
    ) -> Result<PackageFlattened, FilterError> {
        let package = Self::lookup(name, packages).ok_or_else(|| FilterError::PackageNotFound {
            name: name.to_string(),
        })?;

        let mut flattened = PackageFlattened::new(&package.name, &package.version);
        let mut present = HashSet::new();
        Self::deduplicate(&mut flattened.dependencies, &package.dependencies, &mut present);
        Ok(flattened)
    }

    /// Like [`direct_dependencies`](Self::direct_dependencies), but merges the
    /// declared edges of every resolved version of `name`
    ///
    /// The version reported is the first resolved version's.
    pub fn direct_dependencies_all_versions(
        name: &str,
        packages: &[PackageDetails],
    ) -> Result<PackageFlattened, FilterError> {
        let mut flattened = Self::direct_dependencies(name, packages)?;
        let mut present: HashSet<String> = flattened
            .dependency_names()
            .map(str::to_string)
            .collect();

        for package in packages.iter().filter(|p| p.name == name).skip(1) {
            Self::deduplicate(&mut flattened.dependencies, &package.dependencies, &mut present);
        }
        Ok(flattened)
    }

    /// Computes the transitive closure of `name`, sorted by dependency name
    ///
    /// # Errors
    /// `FilterError::PackageNotFound` when `name` is not in `packages`; no
    /// partial closure is returned in that case.
    pub fn expand(name: &str, packages: &[PackageDetails]) -> Result<PackageFlattened, FilterError> {
        let seed = Self::direct_dependencies(name, packages)?;
        Ok(Self::expand_seed(seed, packages))
    }

    /// Expands an already-seeded closure until no unprocessed edge remains
    pub fn expand_seed(mut root: PackageFlattened, packages: &[PackageDetails]) -> PackageFlattened {
        Self::deep_expand(&mut root, packages);
        root.dependencies
            .sort_by(|a, b| a.package.name.cmp(&b.package.name));
        root
    }

    /// Walks the closure in insertion order, merging each edge's own
    /// dependencies in once.
    ///
    /// A name is recorded in `expanded` before its children are fetched, so
    /// a name can never be expanded twice and circular graphs terminate. New
    /// edges are appended behind the cursor and picked up by the same loop.
    fn deep_expand(root: &mut PackageFlattened, packages: &[PackageDetails]) {
        let mut present: HashSet<String> = HashSet::new();
        root.dependencies
            .retain(|d| present.insert(d.package.name.clone()));

        let mut expanded: HashSet<String> = HashSet::new();
        let mut cursor = 0;

        while cursor < root.dependencies.len() {
            let name = root.dependencies[cursor].package.name.clone();
            cursor += 1;

            if !expanded.insert(name.clone()) {
                continue;
            }

            let Some(package) = Self::lookup(&name, packages) else {
                tracing::debug!(
                    root = %root.name,
                    dependency = %name,
                    "dependency has no resolved entry in lockfile"
                );
                continue;
            };

            Self::deduplicate(&mut root.dependencies, &package.dependencies, &mut present);
        }

        for state in &mut root.dependencies {
            state.processed = expanded.contains(&state.package.name);
        }
    }

    /// Appends every edge whose name is not already present
    ///
    /// The first declared version of a name wins; later ones are dropped.
    fn deduplicate(
        target: &mut Vec<DependencyState>,
        incoming: &[Dependency],
        present: &mut HashSet<String>,
    ) {
        for dependency in incoming {
            if present.insert(dependency.name.clone()) {
                target.push(DependencyState::unprocessed(dependency.clone()));
            }
        }
    }
}
