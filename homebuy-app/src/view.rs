//! Read-only view payload for the presentation layer.
//!
//! The fixed row-label order lives here, not in the table model: it is
//! a display contract only, and the engine computes every derived field
//! regardless of it. Formatting (dollar signs, thousands separators,
//! percent suffixes) is applied here and nowhere deeper; non-finite
//! values from a degenerate projection render as "—".

use homebuy_core::calculations::PropertyProjection;
use homebuy_core::table::ComparisonTable;

/// How a row's value is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Dollars,
    Percent,
    Months,
}

type RowExtractor = fn(&PropertyProjection) -> f64;

/// The fixed display rows, in the order the page lays them out.
const ROWS: [(&str, Format, RowExtractor); 13] = [
    ("startAsset", Format::Dollars, |p| p.input.start_asset),
    ("asking", Format::Dollars, |p| p.input.asking),
    ("offer", Format::Dollars, |p| p.input.offer),
    ("downPaymentPct", Format::Percent, |p| p.input.down_payment_pct),
    ("downPaymentDollar", Format::Dollars, |p| p.down_payment_dollar),
    ("closing", Format::Dollars, |p| p.input.closing),
    ("moneyLeft", Format::Dollars, |p| p.money_left),
    ("loanAmount", Format::Dollars, |p| p.loan_amount),
    ("interestRate", Format::Percent, |p| p.input.interest_rate),
    ("monthlyLoan", Format::Dollars, |p| p.monthly_loan),
    ("maintenance", Format::Dollars, |p| p.input.maintenance),
    ("monthly", Format::Dollars, |p| p.monthly),
    ("postClosingAsset", Format::Months, |p| p.post_closing_asset),
];

/// The fixed row labels, in display order.
pub fn row_labels() -> [&'static str; 13] {
    ROWS.map(|(label, _, _)| label)
}

/// One rendered row: its label plus one formatted value per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub label: &'static str,
    pub values: Vec<String>,
}

/// The whole table, rendered: property names as the header, then the
/// thirteen value rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<RowView>,
}

impl TableView {
    pub fn from_table(table: &ComparisonTable) -> Self {
        let headers = table
            .columns()
            .iter()
            .map(|c| c.input.name.clone())
            .collect();
        let rows = ROWS
            .iter()
            .map(|&(label, format, extract)| RowView {
                label,
                values: table
                    .columns()
                    .iter()
                    .map(|column| format_value(extract(column), format))
                    .collect(),
            })
            .collect();
        Self { headers, rows }
    }
}

fn format_value(
    value: f64,
    format: Format,
) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    match format {
        Format::Dollars => format_dollars(value),
        // Percent values come straight from user entry; show them the
        // way they were typed ("25", "3.25") rather than padding decimals.
        Format::Percent => format!("{value}%"),
        Format::Months => format!("{value:.1} mo"),
    }
}

/// `1234567.891` → `"$1,234,567.89"`; negatives keep the sign in front.
fn format_dollars(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}
