use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use rust_decimal::Decimal;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Positive,
    Negative,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Positive => style(text).green(),
        StyleType::Negative => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Formats an `Option<T>` into a `Cell`. `None` is displayed as "N/A".
pub fn format_optional_cell<T>(value: Option<T>, format_fn: impl Fn(T) -> String) -> Cell {
    value.map_or(
        Cell::new("N/A")
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Right),
        |v| Cell::new(format_fn(v)).set_alignment(CellAlignment::Right),
    )
}

/// Right aligned money cell, green or red depending on `positive`.
pub fn money_cell(text: String, positive: bool) -> Cell {
    let color = if positive { Color::Green } else { Color::Red };
    Cell::new(text)
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

pub fn format_change(change: Decimal) -> String {
    let sign = if change >= Decimal::ZERO { "+" } else { "" };
    format!("{sign}{:.2}%", change.round_dp(2))
}

/// Formats an amount with two decimals and thousands separators, e.g.
/// `72,000.00 EUR`.
pub fn format_money(value: Decimal, currency: &str) -> String {
    let rounded = format!("{:.2}", value.abs().round_dp(2));
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.round_dp(2) < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part} {currency}")
}

/// Parses a `#rrggbb` display color. Anything else yields `None`.
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Prints a separator line matching the terminal width.
pub fn print_separator() {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    println!("\n{}", "─".repeat(term_width));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(72000), "EUR"), "72,000.00 EUR");
        assert_eq!(format_money(dec!(-1120.5), "EUR"), "-1,120.50 EUR");
        assert_eq!(format_money(dec!(999.999), "USD"), "1,000.00 USD");
        assert_eq!(format_money(dec!(0), "EUR"), "0.00 EUR");
        assert_eq!(format_money(dec!(1234567.8), "EUR"), "1,234,567.80 EUR");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(dec!(60)), "+60.00%");
        assert_eq!(format_change(dec!(-3.456)), "-3.46%");
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(
            hex_color("#3b82f6"),
            Some(Color::Rgb {
                r: 0x3b,
                g: 0x82,
                b: 0xf6
            })
        );
        assert_eq!(hex_color("blue"), None);
        assert_eq!(hex_color("#12345"), None);
        assert_eq!(hex_color("#zzzzzz"), None);
    }
}
