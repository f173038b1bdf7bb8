use crate::application::dto::{FilterRequest, FilterResponse};
use crate::dependency_attribution::domain::ScanResults;
use std::path::Path;

/// VulnerabilityFilterPort - Inbound port for the attribution filter
///
/// Neither method returns an error. Every internal failure fails open and
/// the findings come back unfiltered.
pub trait VulnerabilityFilterPort {
    /// Removes findings attributable to trusted packages or suppressed
    /// outright, reporting what was done to each entry
    fn execute(&self, request: FilterRequest) -> FilterResponse;

    /// Convenience wrapper returning only the filtered report
    fn filter(&self, results: ScanResults, lockfile_path: &Path) -> ScanResults {
        self.execute(FilterRequest::new(results, lockfile_path.to_path_buf()))
            .results
    }
}
