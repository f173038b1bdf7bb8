/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod filter_request;
mod filter_response;

pub use filter_request::FilterRequest;
pub use filter_response::{Bypass, FilterResponse, FilterSummary};
