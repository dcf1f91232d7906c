use crate::shared::Result;

/// OutputPresenter port for presenting rendered snapshots
///
/// Abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the rendered content
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
