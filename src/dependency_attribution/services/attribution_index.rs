use crate::dependency_attribution::domain::PackageDetails;
use crate::dependency_attribution::policies::SuppressionList;
use crate::dependency_attribution::services::TrustedPackageCache;

/// Decision for one reported package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribution {
    /// `name@version` is on the suppression list
    Suppressed,
    /// Reachable from this trusted root
    AttributedTo(String),
    /// The plugin author is responsible; the finding is kept
    Unattributed,
}

impl Attribution {
    pub fn is_dropped(&self) -> bool {
        !matches!(self, Attribution::Unattributed)
    }
}

/// AttributionIndex answering "should this finding be held against the plugin?"
///
/// Suppression is checked first, then trusted-root attribution.
#[derive(Debug, Clone, Default)]
pub struct AttributionIndex {
    cache: TrustedPackageCache,
    suppressions: SuppressionList,
}

impl AttributionIndex {
    pub fn new(cache: TrustedPackageCache, suppressions: SuppressionList) -> Self {
        Self {
            cache,
            suppressions,
        }
    }

    /// Builds the trusted cache from a parsed lockfile
    pub fn from_packages(packages: &[PackageDetails], suppressions: SuppressionList) -> Self {
        Self::new(TrustedPackageCache::build(packages), suppressions)
    }

    pub fn classify(&self, name: &str, version: &str) -> Attribution {
        if self.suppressions.is_suppressed(name, version) {
            return Attribution::Suppressed;
        }

        match self.cache.attributed_to(name) {
            Some(root) => Attribution::AttributedTo(root.to_string()),
            None => Attribution::Unattributed,
        }
    }

    pub fn attributed_to(&self, name: &str) -> Option<&str> {
        self.cache.attributed_to(name)
    }

    pub fn cache(&self) -> &TrustedPackageCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_attribution::domain::Dependency;
    use crate::dependency_attribution::policies::SuppressedPackage;

    fn packages() -> Vec<PackageDetails> {
        vec![
            PackageDetails::new("@grafana/data", "10.0.0")
                .with_dependencies(vec![Dependency::new("moment", "^2.29.0")]),
            PackageDetails::new("d3-color", "1.4.1"),
            PackageDetails::new("moment", "2.29.1"),
        ]
    }

    #[test]
    fn test_classify_attributed() {
        let index = AttributionIndex::from_packages(&packages(), SuppressionList::default());
        assert_eq!(
            index.classify("moment", "2.29.1"),
            Attribution::AttributedTo("@grafana/data".to_string())
        );
        assert_eq!(index.attributed_to("moment"), Some("@grafana/data"));
    }

    #[test]
    fn test_classify_unattributed() {
        let index = AttributionIndex::from_packages(&packages(), SuppressionList::default());
        let decision = index.classify("d3-color", "1.4.1");
        assert_eq!(decision, Attribution::Unattributed);
        assert!(!decision.is_dropped());
    }

    #[test]
    fn test_suppression_checked_first() {
        let suppressions = SuppressionList::default()
            .extend([SuppressedPackage::parse("d3-color@1.4.1", None).unwrap()]);
        let index = AttributionIndex::from_packages(&packages(), suppressions);

        assert_eq!(index.classify("d3-color", "1.4.1"), Attribution::Suppressed);
        assert!(index.classify("d3-color", "1.4.1").is_dropped());
        assert_eq!(index.classify("d3-color", "3.0.0"), Attribution::Unattributed);
    }

    #[test]
    fn test_default_index_keeps_everything() {
        let index = AttributionIndex::default();
        assert_eq!(index.classify("moment", "2.29.1"), Attribution::Unattributed);
        assert!(index.cache().is_empty());
    }
}
