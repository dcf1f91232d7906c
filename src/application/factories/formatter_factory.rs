use crate::adapters::outbound::formatters::{JsonSnapshotFormatter, TextSnapshotFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::SnapshotFormatter;

/// Factory for creating snapshot formatters
///
/// Selects the outbound formatter adapter for an [`OutputFormat`].
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `colored` - Whether text output may use ANSI colours; ignored for JSON
    ///
    /// # Examples
    /// ```
    /// use depsnap::application::dto::OutputFormat;
    /// use depsnap::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Text, false);
    /// assert_eq!(formatter.format(&[]).unwrap(), "");
    /// ```
    pub fn create(format: OutputFormat, colored: bool) -> Box<dyn SnapshotFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonSnapshotFormatter::new()),
            OutputFormat::Text => Box::new(TextSnapshotFormatter::new(colored)),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering snapshots as JSON...",
            OutputFormat::Text => "📝 Rendering snapshots as a dependency tree...",
        }
    }
}
