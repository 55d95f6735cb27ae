use crate::application::read_models::{ProductView, QuoteReadModel};
use crate::ports::outbound::QuoteFormatter;
use crate::quoting::domain::QuoteRow;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// Width of the label column
const LABEL_WIDTH: usize = 18;

/// Width of the whole row, label and amount included
const ROW_WIDTH: usize = 64;

/// TextFormatter adapter for the terminal
///
/// Renders one block per product in the order of the quote card: base
/// price, the four option rows, misc. parts, subtotals, the four labor
/// rows, tax and the ROM line. Colors are applied after padding so columns
/// line up either way.
pub struct TextFormatter {
    colored: bool,
}

impl TextFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn heading(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.colored {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn total(&self, text: &str) -> String {
        if self.colored {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// `label` on the left, `amount` right-aligned at the row edge
    fn row(label: &str, amount: &str) -> String {
        let gap = ROW_WIDTH.saturating_sub(label.chars().count() + amount.chars().count());
        format!("{}{}{}", label, " ".repeat(gap.max(1)), amount)
    }

    fn option_row(label: &str, selection: &str, amount: &str) -> String {
        let label = format!("{:<width$}", label, width = LABEL_WIDTH);
        Self::row(&format!("{}{}", label, selection), amount)
    }

    fn format_product(&self, product: &ProductView, output: &mut String) {
        output.push_str(&self.heading(&product.name));
        output.push('\n');

        let mut identity = vec![product.manufacturer.clone()];
        if !product.platforms.is_empty() {
            identity.push(product.platforms.join(", "));
        }
        if !product.configurations.is_empty() {
            identity.push(product.configurations.join(", "));
        }
        output.push_str(&self.dim(&identity.join(" | ")));
        output.push('\n');
        output.push_str(&"-".repeat(ROW_WIDTH));
        output.push('\n');

        let mut lines = vec![Self::row(QuoteRow::BasePrice.label(), &product.base_price)];
        for option in &product.options {
            let selection = option.selected_name.as_deref().unwrap_or("-");
            lines.push(Self::option_row(&option.label, selection, &option.price));
        }
        lines.push(Self::row(QuoteRow::MiscParts.label(), &product.misc_parts));
        lines.push(Self::row(QuoteRow::PartsSubtotal.label(), &product.parts_subtotal));
        for labor in &product.labor {
            lines.push(Self::row(&labor.label, &labor.cost));
        }
        lines.push(Self::row(QuoteRow::LaborSubtotal.label(), &product.labor_subtotal));
        lines.push(Self::row(QuoteRow::ProjectSubtotal.label(), &product.project_subtotal));
        lines.push(Self::row(QuoteRow::Tax.label(), &product.tax));

        for line in lines {
            output.push_str(&line);
            output.push('\n');
        }
        output.push_str(&self.total(&Self::row(QuoteRow::Rom.label(), &product.total)));
        output.push_str("\n\n");
    }
}

impl QuoteFormatter for TextFormatter {
    fn format(&self, model: &QuoteReadModel) -> Result<String> {
        let mut output = String::new();

        if model.products.is_empty() {
            output.push_str("No configurations to show.\n");
        }
        for product in &model.products {
            self.format_product(product, &mut output);
        }

        output.push_str(&self.dim(&format!(
            "Showing {} of {} configuration(s). Quote {} generated {}",
            model.summary.shown,
            model.summary.catalog_size,
            model.metadata.quote_id,
            model.metadata.timestamp
        )));
        output.push('\n');
        if let Some(note) = &model.summary.pricing_note {
            output.push_str(&self.dim(note));
            output.push('\n');
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support::sample_read_model;

    fn plain_output() -> String {
        TextFormatter::new(false)
            .format(&sample_read_model())
            .unwrap()
    }

    #[test]
    fn test_text_rows_in_card_order() {
        let output = plain_output();
        let labels = [
            "Base Hardware Price",
            "Media Sources:",
            "Displays:",
            "Camera Options:",
            "Audio Options:",
            "Misc. Parts",
            "Parts Subtotal:",
            "3 Installation Hours",
            "1 Configuration Hours",
            "0 Programming Hours",
            "1 Management Hours",
            "Labor Subtotal:",
            "Project Subtotal:",
            "Tax:",
            "ROM:",
        ];
        let mut last = 0;
        for label in labels {
            let position = output[last..]
                .find(label)
                .unwrap_or_else(|| panic!("{} missing or out of order", label));
            last += position + label.len();
        }
    }

    #[test]
    fn test_text_amounts() {
        let output = plain_output();
        assert!(output.contains("$1275.00"));
        assert!(output.contains("$600.00"));
        assert!(output.contains("$1875.00"));
        assert!(output.contains("$112.50"));
        assert!(output.contains("$1987.50"));
        assert!(output.contains("$75.00"));
    }

    #[test]
    fn test_text_option_rows() {
        let output = plain_output();
        let display = output.lines().find(|l| l.starts_with("Displays:")).unwrap();
        assert!(display.contains("4K 65\""));
        assert!(display.ends_with("$200.00"));

        let camera = output
            .lines()
            .find(|l| l.starts_with("Camera Options:"))
            .unwrap();
        assert!(camera.ends_with("$-"));
        // zero-cost labor keeps its digits
        let programming = output
            .lines()
            .find(|l| l.starts_with("0 Programming Hours"))
            .unwrap();
        assert!(programming.ends_with("$0.00"));
    }

    #[test]
    fn test_text_rows_are_aligned() {
        let output = plain_output();
        let parts = output.lines().find(|l| l.starts_with("Parts Subtotal:")).unwrap();
        let total = output.lines().find(|l| l.starts_with("ROM:")).unwrap();
        assert_eq!(parts.chars().count(), ROW_WIDTH);
        assert_eq!(total.chars().count(), ROW_WIDTH);
    }

    #[test]
    fn test_text_plain_has_no_escape_codes() {
        assert!(!plain_output().contains('\u{1b}'));
    }

    #[test]
    fn test_text_colored_output() {
        let output = TextFormatter::new(true)
            .format(&sample_read_model())
            .unwrap();
        assert!(output.contains('\u{1b}'));
        assert!(output.contains("$1987.50"));
    }

    #[test]
    fn test_text_empty_model() {
        let mut model = sample_read_model();
        model.products.clear();
        model.summary.shown = 0;
        let output = TextFormatter::new(false).format(&model).unwrap();
        assert!(output.starts_with("No configurations to show."));
        assert!(output.contains("Showing 0 of 3"));
    }
}
