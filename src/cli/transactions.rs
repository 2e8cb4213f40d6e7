use super::ui;
use crate::core::{LedgerStore, TransactionKind};
use comfy_table::Cell;

/// Lists transactions in the order they were recorded.
pub fn render(ledger: &LedgerStore, currency: &str) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text("Recent Transactions", ui::StyleType::Title)
    );
    if ledger.transactions().is_empty() {
        output.push_str("No transactions recorded.");
        return output;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Description"),
        ui::header_cell("Amount"),
    ]);

    for transaction in ledger.transactions() {
        let income = transaction.kind == TransactionKind::Income;
        let prefix = if income { "+" } else { "" };
        let amount = ui::format_money(transaction.amount.abs(), currency);
        table.add_row(vec![
            Cell::new(transaction.date.format("%d/%m/%Y").to_string()),
            Cell::new(&transaction.description),
            ui::money_cell(format!("{prefix}{amount}"), income),
        ]);
    }

    output.push_str(&table.to_string());
    output
}

pub fn run(ledger: &LedgerStore, currency: &str) {
    println!("{}", render(ledger, currency));
}
