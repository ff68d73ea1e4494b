//! Export functionality for balance-cli

pub mod csv;

pub use csv::export_balance_csv;
