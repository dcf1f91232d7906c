/// Application layer - the snapshot engine, scenario replay and DTOs
///
/// Coordinates the domain pipeline with hosts and infrastructure
/// through the ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
