use crate::application::read_models::QuoteReadModel;
use crate::shared::Result;

/// QuoteFormatter port for rendering quotes
///
/// This port abstracts the rendering of the formatted quote rows
/// (plain-text table, Markdown, JSON).
pub trait QuoteFormatter {
    /// Formats every product card of the read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &QuoteReadModel) -> Result<String>;
}
