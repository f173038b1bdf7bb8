pub mod flattened;
pub mod lockfile_kind;
pub mod package;
pub mod scan_report;

pub use flattened::{DependencyState, PackageFlattened};
pub use lockfile_kind::LockfileKind;
pub use package::{sort_packages, Dependency, Ecosystem, PackageDetails};
pub use scan_report::{PackageRef, ScanResults};
