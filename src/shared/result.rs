/// Result alias used by helpers, adapters and the CLI.
///
/// Engine operations return [`crate::shared::error::SnapshotError`] instead.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
