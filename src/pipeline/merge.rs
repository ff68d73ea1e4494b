//! Balance merge stage
//!
//! Merges the aggregated revenue and expense series into a single signed
//! net-balance series, keyed and ordered by month.

use std::cmp::Ordering;

use crate::models::{BalanceEntry, DatedAmount};

/// Merge two month-sorted series into one net series
///
/// Classic two-cursor sorted merge: months present in both series emit
/// `revenue - expense`, months present only in one series emit that
/// series' amount (negated for expenses). Both inputs must already be
/// sorted ascending with unique months, which `aggregate_monthly`
/// guarantees; the output is then ascending by construction.
pub fn merge_balances(revenue: &[DatedAmount], expenses: &[DatedAmount]) -> Vec<BalanceEntry> {
    let mut balance = Vec::with_capacity(revenue.len() + expenses.len());
    let mut left = 0;
    let mut right = 0;

    while left < revenue.len() || right < expenses.len() {
        match (revenue.get(left), expenses.get(right)) {
            (Some(rev), Some(exp)) => match rev.start_date.cmp(&exp.start_date) {
                Ordering::Equal => {
                    balance.push(BalanceEntry::new(
                        rev.amount - exp.amount,
                        rev.start_date,
                    ));
                    left += 1;
                    right += 1;
                }
                Ordering::Less => {
                    balance.push(*rev);
                    left += 1;
                }
                Ordering::Greater => {
                    balance.push(BalanceEntry::new(-exp.amount, exp.start_date));
                    right += 1;
                }
            },
            // Expenses exhausted: drain remaining revenue one entry at a time
            (Some(rev), None) => {
                balance.push(*rev);
                left += 1;
            }
            // Revenue exhausted: drain remaining expenses, negated
            (None, Some(exp)) => {
                balance.push(BalanceEntry::new(-exp.amount, exp.start_date));
                right += 1;
            }
            (None, None) => break,
        }
    }

    balance
}
