/// Formatters rendering published snapshots
mod json_formatter;
mod text_formatter;

pub use json_formatter::JsonSnapshotFormatter;
pub use text_formatter::TextSnapshotFormatter;
