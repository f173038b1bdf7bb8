/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports are what drives the filter; outbound ports are what the
/// filter drives (file system, console, lockfile dialects).
pub mod inbound;
pub mod outbound;
