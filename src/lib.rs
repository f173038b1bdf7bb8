//! plugin-osv-filter - vulnerability attribution for Grafana plugins
//!
//! This library parses JavaScript lockfiles (yarn, npm, pnpm) into a
//! normalized package graph and drops osv-scanner findings that a plugin only
//! inherits through the trusted Grafana SDK packages (`@grafana/data`,
//! `@grafana/ui`, ...), following hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_attribution`): package graph model,
//!   graph expansion, trusted-package cache and attribution policies
//! - **Application Layer** (`application`): the filter use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): lockfile parsers, file system and console
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use plugin_osv_filter::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let reader = FileSystemReader::new();
//! let results = reader.read_scan_results(Path::new("osv-results.json"))?;
//!
//! let use_case = FilterVulnerabilitiesUseCase::new(reader, StderrProgressReporter::new());
//! let filtered = use_case.filter(results, Path::new("plugin/yarn.lock"));
//!
//! println!("{}", filtered.to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_attribution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::lockfile::{NpmLockParser, PnpmLockParser, YarnLockParser};
    pub use crate::application::dto::{Bypass, FilterRequest, FilterResponse, FilterSummary};
    pub use crate::application::factories::ParserFactory;
    pub use crate::application::use_cases::FilterVulnerabilitiesUseCase;
    pub use crate::dependency_attribution::domain::{
        Dependency, LockfileKind, PackageDetails, PackageFlattened, ScanResults,
    };
    pub use crate::dependency_attribution::policies::{
        SuppressedPackage, SuppressionList, TrustedRoots,
    };
    pub use crate::dependency_attribution::services::{
        Attribution, AttributionIndex, GraphExpander, TrustedPackageCache,
    };
    pub use crate::ports::inbound::VulnerabilityFilterPort;
    pub use crate::ports::outbound::{
        LockfileParser, LockfileReader, OutputPresenter, ProgressReporter, ScanResultsReader,
    };
    pub use crate::shared::Result;
}
