//! Balance entries and pipeline documents
//!
//! Defines the wire-format structures: dated amounts, the two-category
//! input document, and the final balance sheet.

use serde::{Deserialize, Serialize};

use super::{Money, Month};

/// One dated monetary entry: a single transaction or one month's total
///
/// `start_date` is the first day of the month the entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedAmount {
    /// Signed amount; a missing field on the wire reads as zero
    #[serde(default)]
    pub amount: Money,
    /// Period start date, normalized to the first day of a month
    pub start_date: Month,
}

impl DatedAmount {
    /// Create a new dated amount
    pub fn new(amount: Money, start_date: Month) -> Self {
        Self { amount, start_date }
    }

    /// Create a zero-amount entry for the given month
    pub fn zero(start_date: Month) -> Self {
        Self {
            amount: Money::zero(),
            start_date,
        }
    }
}

/// One month's net balance (revenue minus expense); same shape as a dated amount
pub type BalanceEntry = DatedAmount;

/// Input document for the balance pipeline
///
/// Both categories are optional on the wire and default to empty sequences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceInput {
    /// Revenue entries, in arbitrary order
    #[serde(default)]
    pub revenue_data: Vec<DatedAmount>,
    /// Expense entries, in arbitrary order
    #[serde(default)]
    pub expense_data: Vec<DatedAmount>,
}

/// The final balance sheet: one net entry per calendar month, ascending,
/// with no gaps and no duplicate months
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Chronological net balance series
    pub balance: Vec<BalanceEntry>,
}

impl BalanceSheet {
    /// Number of months covered by the sheet
    pub fn len(&self) -> usize {
        self.balance.len()
    }

    /// Check whether the sheet is empty
    pub fn is_empty(&self) -> bool {
        self.balance.is_empty()
    }

    /// Sum of all net amounts
    pub fn total(&self) -> Money {
        self.balance.iter().map(|e| e.amount).sum()
    }
}
