use crate::application::read_models::{ProductView, QuoteReadModel};
use crate::ports::outbound::QuoteFormatter;
use crate::quoting::domain::QuoteRow;
use crate::shared::Result;

/// Markdown table header for a quote card
const TABLE_HEADER: &str = "| Item | Selection | Amount |\n";

/// Markdown table separator line, amount column right-aligned
const TABLE_SEPARATOR: &str = "|------|-----------|-------:|\n";

/// MarkdownFormatter adapter producing one section per product
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn table_row(output: &mut String, item: &str, selection: &str, amount: &str) {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            Self::escape_markdown_table_cell(item),
            Self::escape_markdown_table_cell(selection),
            amount
        ));
    }

    fn render_product(output: &mut String, product: &ProductView) {
        output.push_str(&format!("## {}\n\n", product.name));

        output.push_str(&format!("**Manufacturer:** {}  \n", product.manufacturer));
        if !product.platforms.is_empty() {
            output.push_str(&format!(
                "**Platforms:** {}  \n",
                product.platforms.join(", ")
            ));
        }
        if !product.configurations.is_empty() {
            output.push_str(&format!(
                "**Configuration:** {}  \n",
                product.configurations.join(", ")
            ));
        }
        if !product.image_source.is_empty() {
            output.push_str(&format!(
                "\n![{}]({})\n",
                product.name, product.image_source
            ));
        }
        output.push('\n');

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        Self::table_row(output, QuoteRow::BasePrice.label(), "", &product.base_price);
        for option in &product.options {
            let selection = option.selected_name.as_deref().unwrap_or("-");
            Self::table_row(output, &option.label, selection, &option.price);
        }
        Self::table_row(output, QuoteRow::MiscParts.label(), "", &product.misc_parts);
        Self::table_row(
            output,
            &format!("**{}**", QuoteRow::PartsSubtotal.label()),
            "",
            &format!("**{}**", product.parts_subtotal),
        );
        for labor in &product.labor {
            Self::table_row(output, &labor.label, "", &labor.cost);
        }
        Self::table_row(
            output,
            &format!("**{}**", QuoteRow::LaborSubtotal.label()),
            "",
            &format!("**{}**", product.labor_subtotal),
        );
        Self::table_row(output, QuoteRow::ProjectSubtotal.label(), "", &product.project_subtotal);
        Self::table_row(output, QuoteRow::Tax.label(), "", &product.tax);
        Self::table_row(
            output,
            &format!("**{}**", QuoteRow::Rom.label()),
            "",
            &format!("**{}**", product.total),
        );
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteFormatter for MarkdownFormatter {
    fn format(&self, model: &QuoteReadModel) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Hardware Quote\n\n");
        output.push_str(&format!(
            "_Quote {} generated {} by {} {}_\n\n",
            model.metadata.quote_id,
            model.metadata.timestamp,
            model.metadata.tool_name,
            model.metadata.tool_version
        ));

        if model.products.is_empty() {
            output.push_str("No configurations to show.\n\n");
        }
        for product in &model.products {
            Self::render_product(&mut output, product);
        }

        output.push_str(&format!(
            "Showing {} of {} configuration(s).\n",
            model.summary.shown, model.summary.catalog_size
        ));
        if let Some(note) = &model.summary.pricing_note {
            output.push_str(&format!("\n> {}\n", note));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support::sample_read_model;

    #[test]
    fn test_markdown_sections() {
        let output = MarkdownFormatter::new()
            .format(&sample_read_model())
            .unwrap();

        assert!(output.starts_with("# Hardware Quote\n"));
        assert!(output.contains("## Rally Bar"));
        assert!(output.contains("**Manufacturer:** Logitech"));
        assert!(output.contains("**Platforms:** Microsoft Teams, Zoom Rooms"));
        assert!(output.contains("![Rally Bar](images/rally-bar.png)"));
        assert!(output.contains(TABLE_HEADER));
        assert!(output.contains("Showing 1 of 3 configuration(s)."));
    }

    #[test]
    fn test_markdown_table_rows() {
        let output = MarkdownFormatter::new()
            .format(&sample_read_model())
            .unwrap();

        assert!(output.contains("| Base Hardware Price |  | $1000.00 |"));
        assert!(output.contains("| Displays: | 4K 65\" | $200.00 |"));
        assert!(output.contains("| Camera Options: | - | $- |"));
        assert!(output.contains("| Misc. Parts |  | $75.00 |"));
        assert!(output.contains("| 3 Installation Hours |  | $300.00 |"));
        assert!(output.contains("| 0 Programming Hours |  | $0.00 |"));
        assert!(output.contains("| **Parts Subtotal:** |  | **$1275.00** |"));
        assert!(output.contains("| **Labor Subtotal:** |  | **$600.00** |"));
        assert!(output.contains("| Project Subtotal: |  | $1875.00 |"));
        assert!(output.contains("| Tax: |  | $112.50 |"));
        assert!(output.contains("| **ROM:** |  | **$1987.50** |"));
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("A | B\nC"),
            "A \\| B C"
        );
    }

    #[test]
    fn test_markdown_pricing_note() {
        let mut model = sample_read_model();
        model.summary.pricing_note = Some("Custom pricing".to_string());
        let output = MarkdownFormatter::new().format(&model).unwrap();
        assert!(output.ends_with("> Custom pricing\n"));
    }
}
