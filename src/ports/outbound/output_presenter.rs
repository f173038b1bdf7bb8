use crate::shared::Result;

/// OutputPresenter port for presenting the filtered report
///
/// Abstracts the destination (stdout, file) of the serialized report.
pub trait OutputPresenter {
    /// Writes `content` to the destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
