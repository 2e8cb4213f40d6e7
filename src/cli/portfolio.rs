use super::ui;
use crate::core::{AggregationEngine, ReportingPeriod};
use comfy_table::Cell;

/// Renders the portfolio value series for `period` and its overall change.
pub fn render(engine: &AggregationEngine<'_>, period: ReportingPeriod, currency: &str) -> String {
    let series = engine.portfolio_series_for(period);

    let mut output = format!(
        "{} ({period})\n\n",
        ui::style_text("Portfolio Performance", ui::StyleType::Title)
    );
    if series.is_empty() {
        output.push_str("No portfolio history recorded.");
        return output;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Period"), ui::header_cell("Value")]);
    for sample in series {
        table.add_row(vec![
            Cell::new(&sample.label),
            Cell::new(ui::format_money(sample.value, currency)),
        ]);
    }
    output.push_str(&table.to_string());

    let change = engine.portfolio_change(period).map_or(
        ui::style_text("N/A", ui::StyleType::Subtle),
        |c| {
            let style_type = if c.is_sign_negative() {
                ui::StyleType::Negative
            } else {
                ui::StyleType::Positive
            };
            ui::style_text(&ui::format_change(c), style_type)
        },
    );
    output.push_str(&format!(
        "\n\n{}: {change}",
        ui::style_text("Change", ui::StyleType::TotalLabel)
    ));
    output
}

pub fn run(engine: &AggregationEngine<'_>, period: ReportingPeriod, currency: &str) {
    println!("{}", render(engine, period, currency));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LedgerStore, PortfolioSample};
    use rust_decimal_macros::dec;

    fn ledger() -> LedgerStore {
        LedgerStore::new(
            vec![],
            vec![],
            vec![
                PortfolioSample {
                    label: "Jan".to_string(),
                    value: dec!(45000),
                },
                PortfolioSample {
                    label: "Jun".to_string(),
                    value: dec!(72000),
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_portfolio_renders_series_and_change() {
        let ledger = ledger();
        let output = render(&AggregationEngine::new(&ledger), ReportingPeriod::Week, "EUR");

        assert!(output.contains("(week)"));
        assert!(output.contains("Jan"));
        assert!(output.contains("72,000.00 EUR"));
        assert!(output.contains("+60.00%"));
    }

    #[test]
    fn test_portfolio_without_history() {
        let ledger = LedgerStore::default();
        let output = render(&AggregationEngine::new(&ledger), ReportingPeriod::Month, "EUR");
        assert!(output.contains("No portfolio history recorded."));
    }
}
