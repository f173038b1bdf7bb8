/// ProgressReporter port for user-facing status messages
///
/// Messages go to the operator of the validation run, not into the report,
/// so implementations must never write to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
