/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and adapters,
/// keeping the domain layer isolated.
mod output_format;
mod quote_request;
mod quote_response;

pub use output_format::OutputFormat;
pub use quote_request::{QuoteRequest, QuoteRequestBuilder};
pub use quote_response::QuoteResponse;
