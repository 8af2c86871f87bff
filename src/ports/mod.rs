/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the infrastructure interfaces the
/// application core talks to. The CLI drives the use case directly.
pub mod outbound;
