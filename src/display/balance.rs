//! Terminal rendering of a balance sheet
//!
//! Formats the monthly net series as a report-style table with a running
//! total column.

use crate::models::{BalanceSheet, Money};

/// Format a balance sheet for terminal display
pub fn format_balance_sheet(sheet: &BalanceSheet, currency_symbol: &str) -> String {
    let mut output = String::new();

    // Header
    output.push_str("Monthly Balance Sheet\n");
    output.push_str(&"=".repeat(50));
    output.push('\n');

    if sheet.is_empty() {
        output.push_str("No transactions.\n");
        return output;
    }

    // Column headers
    output.push_str(&format!(
        "{:<10} {:>18} {:>18}\n",
        "Month", "Net", "Running Total"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    let mut running_total = Money::zero();
    for entry in &sheet.balance {
        running_total += entry.amount;
        output.push_str(&format!(
            "{:<10} {:>18} {:>18}\n",
            entry.start_date.to_string(),
            entry.amount.format_with_symbol(currency_symbol),
            running_total.format_with_symbol(currency_symbol)
        ));
    }

    // Totals
    output.push_str(&"-".repeat(50));
    output.push('\n');
    output.push_str(&format!(
        "{:<10} {:>18}\n",
        "TOTAL",
        sheet.total().format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!("Months covered: {}\n", sheet.len()));

    output
}
