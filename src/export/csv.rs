//! CSV export of a balance sheet

use std::io::Write;

use crate::error::{BalanceError, BalanceResult};
use crate::models::BalanceSheet;

/// Export a balance sheet to CSV format
///
/// Writes one row per month plus a final TOTAL row. Amounts are
/// unit-denominated with two decimal places.
pub fn export_balance_csv<W: Write>(sheet: &BalanceSheet, writer: &mut W) -> BalanceResult<()> {
    // Write header
    writeln!(writer, "Month,Amount").map_err(|e| BalanceError::Export(e.to_string()))?;

    // Write data rows
    for entry in &sheet.balance {
        writeln!(
            writer,
            "{},{:.2}",
            entry.start_date,
            entry.amount.cents() as f64 / 100.0
        )
        .map_err(|e| BalanceError::Export(e.to_string()))?;
    }

    // Total row
    writeln!(
        writer,
        "TOTAL,{:.2}",
        sheet.total().cents() as f64 / 100.0
    )
    .map_err(|e| BalanceError::Export(e.to_string()))?;

    Ok(())
}
