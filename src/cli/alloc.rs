use super::ui;
use crate::core::AggregationEngine;
use comfy_table::Cell;
use rust_decimal::Decimal;

pub fn render(engine: &AggregationEngine<'_>, currency: &str) -> String {
    let distribution = engine.asset_distribution();

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Category"),
        ui::header_cell("Value"),
        ui::header_cell("Allocation"),
    ]);

    for entry in &distribution {
        let mut name = Cell::new(entry.category.label());
        if let Some(color) = entry.color.as_deref().and_then(ui::hex_color) {
            name = name.fg(color);
        }
        table.add_row(vec![
            name,
            Cell::new(ui::format_money(entry.value, currency)),
            ui::format_optional_cell(entry.share, |s| {
                format!("{:.2}%", (s * Decimal::ONE_HUNDRED).round_dp(2))
            }),
        ]);
    }

    let mut output = format!(
        "{}\n\n",
        ui::style_text("Asset Allocation", ui::StyleType::Title)
    );
    if distribution.is_empty() {
        output.push_str("No holdings recorded.");
        return output;
    }
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{}: {}",
        ui::style_text("Total", ui::StyleType::TotalLabel),
        ui::style_text(
            &ui::format_money(engine.total_assets(), currency),
            ui::StyleType::TotalValue
        )
    ));
    output
}

pub fn run(engine: &AggregationEngine<'_>, currency: &str) {
    println!("{}", render(engine, currency));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ledger::tests::holding;
    use crate::core::{AssetCategory, LedgerStore};
    use rust_decimal_macros::dec;

    #[test]
    fn test_alloc_shows_percentages() {
        let ledger = LedgerStore::new(
            vec![],
            vec![
                holding(AssetCategory::CashSavings, dec!(30000)),
                holding(AssetCategory::Collectibles, dec!(5000)),
            ],
            vec![],
        )
        .unwrap();
        let output = render(&AggregationEngine::new(&ledger), "EUR");

        assert!(output.contains("Cash & Savings"));
        assert!(output.contains("85.71%"));
        assert!(output.contains("14.29%"));
        assert!(output.contains("35,000.00 EUR"));
    }

    #[test]
    fn test_alloc_marks_undefined_shares() {
        let ledger = LedgerStore::new(
            vec![],
            vec![holding(AssetCategory::Crypto, dec!(0))],
            vec![],
        )
        .unwrap();
        let output = render(&AggregationEngine::new(&ledger), "EUR");

        assert!(output.contains("N/A"));
        assert!(!output.contains('%'));
    }

    #[test]
    fn test_alloc_without_holdings() {
        let ledger = LedgerStore::default();
        let output = render(&AggregationEngine::new(&ledger), "EUR");
        assert!(output.contains("No holdings recorded."));
    }
}
