use super::ui;
use crate::core::AggregationEngine;
use comfy_table::Cell;

/// Renders the headline figures: net worth and this month's cash flow.
pub fn render(engine: &AggregationEngine<'_>, currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Total Assets"),
        ui::header_cell("Income"),
        ui::header_cell("Expenses"),
        ui::header_cell("Net"),
    ]);

    let net = engine.net_income();
    table.add_row(vec![
        Cell::new(ui::format_money(engine.total_assets(), currency)),
        ui::money_cell(ui::format_money(engine.monthly_income(), currency), true),
        ui::money_cell(ui::format_money(engine.monthly_expenses(), currency), false),
        ui::money_cell(ui::format_money(net, currency), engine.is_surplus()),
    ]);

    let mut output = format!("{}\n\n", ui::style_text("Summary", ui::StyleType::Title));
    output.push_str(&table.to_string());
    output
}

pub fn run(engine: &AggregationEngine<'_>, currency: &str) {
    println!("{}", render(engine, currency));
}
