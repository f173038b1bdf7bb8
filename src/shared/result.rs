/// Crate-wide result type backed by `anyhow::Error`.
///
/// Typed failures are raised as [`FilterError`](crate::shared::error::FilterError)
/// and converted with `?`; callers that care can `downcast_ref` them back.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
