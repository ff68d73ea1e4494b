//! Gap-filling stage
//!
//! Walks the merged balance series month by month and inserts zero-amount
//! entries for months with no activity, so the final series has uniform
//! monthly granularity.

use std::collections::HashSet;

use crate::models::{BalanceEntry, Month};

/// Fill missing calendar months with zero-amount entries
///
/// The input is expected ascending (as produced by `merge_balances`); the
/// range walked is first entry's month through last entry's month,
/// inclusive. Membership is checked against a `HashSet` of the months
/// already present, and the combined sequence is re-sorted at the end.
/// Empty input returns empty. Running the stage on its own output is a
/// no-op since every month in range is already present.
pub fn fill_missing_months(mut balance: Vec<BalanceEntry>) -> Vec<BalanceEntry> {
    if balance.is_empty() {
        return balance;
    }

    let start = balance[0].start_date;
    let end = balance[balance.len() - 1].start_date;
    let present: HashSet<Month> = balance.iter().map(|e| e.start_date).collect();

    let mut cursor = start;
    while cursor <= end {
        if !present.contains(&cursor) {
            balance.push(BalanceEntry::zero(cursor));
        }
        cursor = cursor.next();
    }

    // Months are unique at this point, so no ties to break
    balance.sort_by(|a, b| a.start_date.cmp(&b.start_date));
    balance
}
