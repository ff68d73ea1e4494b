//! Monthly aggregation stage
//!
//! Collapses a list of dated amounts into one entry per distinct month,
//! summing amounts that share a month.

use crate::models::DatedAmount;

/// Aggregate arbitrary-order entries into one summed entry per month,
/// sorted ascending by month
///
/// Equal months compare equal under `Month`'s total order, so the sort is a
/// genuine three-way comparison and amounts sharing a month always land
/// adjacent before the accumulation scan.
pub fn aggregate_monthly(mut entries: Vec<DatedAmount>) -> Vec<DatedAmount> {
    entries.sort_by(|a, b| a.start_date.cmp(&b.start_date));

    let mut monthly = Vec::new();
    let mut iter = entries.into_iter();

    let mut current = match iter.next() {
        Some(first) => first,
        None => return monthly,
    };

    for entry in iter {
        if entry.start_date == current.start_date {
            current.amount += entry.amount;
        } else {
            monthly.push(current);
            current = entry;
        }
    }
    monthly.push(current);

    monthly
}
