/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the driven side: where the catalog comes from,
/// how a quote is rendered, and where the output goes.
pub mod outbound;
