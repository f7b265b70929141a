/// ProgressReporter port for user-facing progress during a verification run
///
/// Messages go to a side channel (stderr for the CLI) so they never mix
/// with the report written to stdout.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports how many SBOM files have been finished out of `total`
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or a per-file failure
    fn report_error(&self, message: &str);

    /// Reports the end of the run
    fn report_completion(&self, message: &str);
}
