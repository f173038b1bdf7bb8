/// Use cases module containing application business logic orchestration
mod filter_vulnerabilities;

pub use filter_vulnerabilities::FilterVulnerabilitiesUseCase;
