/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod catalog_parser;
pub mod console;
pub mod embedded;
pub mod filesystem;
pub mod formatters;
pub mod network;
