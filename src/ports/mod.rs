/// Ports between the snapshot engine and the outside world
///
/// Inbound ports are what hosts call (apply a batch, read a snapshot).
/// Outbound ports are what the engine and CLI call (listeners, readers,
/// formatters, presenters).
pub mod inbound;
pub mod outbound;
