/// Inbound ports (Driving ports) - Engine interfaces
///
/// These ports define the interfaces that hosts and adapters (e.g., the CLI)
/// use to drive the snapshot engine.
pub mod dependency_snapshot_port;

pub use dependency_snapshot_port::DependencySnapshotPort;
