/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the file system, the console and the lockfile dialects.
pub mod lockfile_parser;
pub mod lockfile_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod scan_results_reader;

pub use lockfile_parser::LockfileParser;
pub use lockfile_reader::LockfileReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use scan_results_reader::ScanResultsReader;
