use crate::dependency_attribution::domain::{PackageDetails, PackageFlattened};
use crate::dependency_attribution::policies::TrustedRoots;
use crate::dependency_attribution::services::GraphExpander;

/// TrustedPackageCache holding the precomputed closure of every trusted root
/// present in one lockfile
///
/// Built once per filter call. A scanner reports findings against leaf
/// packages with no hint of which top-level dependency pulled them in, so
/// walking each trusted root once up front turns every later attribution
/// question into a bounded scan.
#[derive(Debug, Clone, Default)]
pub struct TrustedPackageCache {
    entries: Vec<PackageFlattened>,
}

impl TrustedPackageCache {
    /// Builds the cache for the fixed [`TrustedRoots`] allowlist
    pub fn build(packages: &[PackageDetails]) -> Self {
        Self::build_for(TrustedRoots::names(), packages)
    }

    /// Builds the cache for an explicit list of root names
    ///
    /// Roots absent from `packages` are omitted; they never fail the build.
    /// A root resolved at several versions is seeded with the union of all
    /// those versions' direct dependencies. Entries are sorted by root name.
    pub fn build_for(roots: &[&str], packages: &[PackageDetails]) -> Self {
        let mut entries = Vec::new();

        for root in roots {
            match GraphExpander::direct_dependencies_all_versions(root, packages) {
                Ok(seed) => {
                    let flattened = GraphExpander::expand_seed(seed, packages);
                    tracing::debug!(
                        root = %root,
                        dependencies = flattened.len(),
                        "cached trusted package closure"
                    );
                    entries.push(flattened);
                }
                Err(e) => {
                    tracing::debug!(root = %root, "omitting trusted package: {}", e);
                }
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { entries }
    }

    /// Returns the first trusted root whose closure contains `name`
    ///
    /// Matching is by name only; the version of the finding is not consulted.
    pub fn attributed_to(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.contains(name))
            .map(|entry| entry.name.as_str())
    }

    pub fn get(&self, root: &str) -> Option<&PackageFlattened> {
        self.entries.iter().find(|entry| entry.name == root)
    }

    pub fn entries(&self) -> &[PackageFlattened] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
