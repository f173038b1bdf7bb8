/// Inbound ports (Driving ports) - Use case interfaces
///
/// The analyzer pass scheduler (or the bundled CLI) drives the filter
/// through these.
pub mod vulnerability_filter_port;

pub use vulnerability_filter_port::VulnerabilityFilterPort;
