/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// file access, the console and the three lockfile dialects.
pub mod outbound;
