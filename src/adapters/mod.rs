/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: filesystem, console,
/// formatters and publish notifications.
pub mod outbound;
