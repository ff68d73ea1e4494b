//! Terminal display for balance-cli

pub mod balance;

pub use balance::format_balance_sheet;
