//! The balance computation pipeline
//!
//! Three stages composed as a straight-line transformation:
//!
//! 1. `aggregate` — collapse each category's entries into one total per month
//! 2. `merge` — sorted two-way merge of the two series into a net series
//! 3. `gap_fill` — insert zero entries for months with no activity
//!
//! Each stage consumes its input and produces a fresh sequence; the
//! pipeline is pure, synchronous, and stateless across invocations.

pub mod aggregate;
pub mod gap_fill;
pub mod merge;

pub use aggregate::aggregate_monthly;
pub use gap_fill::fill_missing_months;
pub use merge::merge_balances;

use crate::models::{BalanceInput, BalanceSheet};

/// Run the full pipeline: aggregate both categories, merge, gap-fill
pub fn generate_balance_sheet(input: BalanceInput) -> BalanceSheet {
    let revenue = aggregate_monthly(input.revenue_data);
    let expenses = aggregate_monthly(input.expense_data);

    let merged = merge_balances(&revenue, &expenses);
    let balance = fill_missing_months(merged);

    BalanceSheet { balance }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DatedAmount, Money, Month};

    fn entry(cents: i64, year: i32, month: u32) -> DatedAmount {
        DatedAmount::new(Money::from_cents(cents), Month::new(year, month))
    }

    #[test]
    fn test_same_month_revenue_sums_into_single_entry() {
        // Two revenue entries in January, no expenses
        let input = BalanceInput {
            revenue_data: vec![entry(10000, 2024, 1), entry(5000, 2024, 1)],
            expense_data: vec![],
        };
        let sheet = generate_balance_sheet(input);
        assert_eq!(sheet.balance, vec![entry(15000, 2024, 1)]);
    }

    #[test]
    fn test_gap_between_revenue_and_expense_months_is_zero_filled() {
        // Revenue in January, expense in March: February appears as zero
        let input = BalanceInput {
            revenue_data: vec![entry(20000, 2024, 1)],
            expense_data: vec![entry(5000, 2024, 3)],
        };
        let sheet = generate_balance_sheet(input);
        assert_eq!(
            sheet.balance,
            vec![
                entry(20000, 2024, 1),
                entry(0, 2024, 2),
                entry(-5000, 2024, 3),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_sheet() {
        let sheet = generate_balance_sheet(BalanceInput::default());
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_shared_months_net_out() {
        let input = BalanceInput {
            revenue_data: vec![entry(30000, 2024, 5), entry(10000, 2024, 7)],
            expense_data: vec![entry(12000, 2024, 5), entry(4000, 2024, 6)],
        };
        let sheet = generate_balance_sheet(input);
        assert_eq!(
            sheet.balance,
            vec![
                entry(18000, 2024, 5),
                entry(-4000, 2024, 6),
                entry(10000, 2024, 7),
            ]
        );
    }

    #[test]
    fn test_sheet_output_wire_format() {
        let input = BalanceInput {
            revenue_data: vec![entry(20000, 2024, 1)],
            expense_data: vec![entry(5000, 2024, 3)],
        };
        let sheet = generate_balance_sheet(input);
        let json = serde_json::to_value(&sheet).unwrap();

        let balance = json["balance"].as_array().unwrap();
        assert_eq!(balance.len(), 3);
        assert_eq!(balance[0]["startDate"], "2024-01-01T00:00:00.000Z");
        assert_eq!(balance[1]["startDate"], "2024-02-01T00:00:00.000Z");
        assert_eq!(balance[1]["amount"], 0.0);
        assert_eq!(balance[2]["amount"], -50.0);
    }

    #[test]
    fn test_pipeline_is_stateless_across_calls() {
        let input = BalanceInput {
            revenue_data: vec![entry(100, 2024, 1)],
            expense_data: vec![],
        };
        let first = generate_balance_sheet(input.clone());
        let second = generate_balance_sheet(input);
        assert_eq!(first.balance, second.balance);
    }
}
