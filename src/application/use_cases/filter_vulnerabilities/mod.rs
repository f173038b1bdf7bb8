use crate::application::dto::{Bypass, FilterRequest, FilterResponse, FilterSummary};
use crate::application::factories::ParserFactory;
use crate::dependency_attribution::domain::{LockfileKind, PackageDetails, ScanResults};
use crate::dependency_attribution::policies::SuppressionList;
use crate::dependency_attribution::services::{Attribution, AttributionIndex};
use crate::ports::inbound::VulnerabilityFilterPort;
use crate::ports::outbound::{LockfileParser, LockfileReader, ProgressReporter};
use crate::shared::error::FilterError;
use crate::shared::Result;
use std::path::Path;

/// FilterVulnerabilitiesUseCase - Core use case removing findings that are
/// not the plugin author's to fix
///
/// A finding is dropped when its exact `name@version` is suppressed, or when
/// its package is pulled in by a trusted Grafana SDK package. Everything that
/// goes wrong along the way fails open and returns the report unfiltered.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `PR` - ProgressReporter implementation
pub struct FilterVulnerabilitiesUseCase<LR, PR> {
    lockfile_reader: LR,
    progress_reporter: PR,
    suppressions: SuppressionList,
}

impl<LR, PR> FilterVulnerabilitiesUseCase<LR, PR>
where
    LR: LockfileReader,
    PR: ProgressReporter,
{
    /// Creates the use case with the built-in suppression list
    pub fn new(lockfile_reader: LR, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            progress_reporter,
            suppressions: SuppressionList::builtin(),
        }
    }

    /// Replaces the suppression list (typically builtin + config entries)
    pub fn with_suppressions(mut self, suppressions: SuppressionList) -> Self {
        self.suppressions = suppressions;
        self
    }

    /// Reads and parses the lockfile, reporting progress
    fn load_packages(
        &self,
        parser: &dyn LockfileParser,
        lockfile_path: &Path,
    ) -> Result<Vec<PackageDetails>> {
        self.progress_reporter.report(&format!(
            "📖 Loading {} from: {}",
            parser.kind(),
            lockfile_path.display()
        ));

        let content = self.lockfile_reader.read_lockfile(lockfile_path)?;
        let packages = parser.parse(&content)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", packages.len()));
        Ok(packages)
    }

    /// Drops attributed and suppressed entries, keeping every source
    fn apply(index: &AttributionIndex, mut results: ScanResults) -> (ScanResults, FilterSummary) {
        let mut summary = FilterSummary::default();

        results.retain_packages(|finding| match index.classify(finding.name, finding.version) {
            Attribution::Unattributed => true,
            Attribution::Suppressed => {
                tracing::debug!(
                    package = %finding.name,
                    version = %finding.version,
                    "finding suppressed"
                );
                summary.suppressed += 1;
                false
            }
            Attribution::AttributedTo(root) => {
                tracing::debug!(
                    package = %finding.name,
                    root = %root,
                    "finding attributed to trusted package"
                );
                *summary.attributed.entry(root).or_default() += 1;
                false
            }
        });
        summary.kept = results.package_count();

        (results, summary)
    }

    fn fail_open(&self, results: ScanResults, error: anyhow::Error) -> FilterResponse {
        tracing::warn!("lockfile unusable, returning unfiltered findings: {:#}", error);
        self.progress_reporter.report_error(&format!(
            "⚠️  Warning: findings are not filtered.\n{}",
            error
        ));
        FilterResponse::bypassed(results, Bypass::LockfileError(error.to_string()))
    }
}

impl<LR, PR> VulnerabilityFilterPort for FilterVulnerabilitiesUseCase<LR, PR>
where
    LR: LockfileReader,
    PR: ProgressReporter,
{
    fn execute(&self, request: FilterRequest) -> FilterResponse {
        let FilterRequest {
            results,
            lockfile_path,
        } = request;

        // Step 1: Select the dialect from the file name
        let Some(kind) = LockfileKind::from_path(&lockfile_path) else {
            let error = FilterError::UnsupportedLockfile {
                path: lockfile_path,
            };
            tracing::warn!("{}", error);
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: findings are not filtered.\n{}", error));
            return FilterResponse::bypassed(results, Bypass::UnsupportedLockfile);
        };

        let Some(parser) = ParserFactory::create(kind) else {
            tracing::debug!(lockfile = %kind, "not a JavaScript lockfile, passing findings through");
            return FilterResponse::bypassed(results, Bypass::NotJavaScript(kind));
        };

        if results.package_count() == 0 {
            return FilterResponse::bypassed(results, Bypass::NoFindings);
        }

        // Step 2: Read and parse the lockfile
        let packages = match self.load_packages(parser.as_ref(), &lockfile_path) {
            Ok(packages) => packages,
            Err(e) => return self.fail_open(results, e),
        };

        // Step 3: Precompute trusted closures
        let index = AttributionIndex::from_packages(&packages, self.suppressions.clone());
        tracing::debug!(
            trusted_packages = index.cache().len(),
            suppressions = self.suppressions.len(),
            "attribution index built"
        );

        // Step 4: Classify every finding
        let (results, summary) = Self::apply(&index, results);
        tracing::debug!(
            kept = summary.kept,
            suppressed = summary.suppressed,
            attributed = summary.attributed_total(),
            "filter complete"
        );

        FilterResponse::filtered(results, summary)
    }
}
