/// Ports module defining interfaces for hexagonal architecture
///
/// The application is driven directly by the CLI, so only outbound
/// (driven) ports are defined.
pub mod outbound;
