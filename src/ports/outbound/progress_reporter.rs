/// ProgressReporter port for reporting progress while replaying batches
///
/// Keeps user feedback (e.g., on stderr) out of the use cases.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a known number of steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total expected steps
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
