/// Dependency attribution bounded context
///
/// Pure domain logic: the normalized package graph, cycle-safe closure
/// computation, and the policies deciding which findings are attributed to
/// trusted upstream packages. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
