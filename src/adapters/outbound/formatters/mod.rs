/// Formatter adapters for the quote output formats
mod json_formatter;
mod markdown_formatter;
#[cfg(test)]
mod test_support;
mod text_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use text_formatter::TextFormatter;
