//! Core data models for balance-cli
//!
//! This module contains the data structures that represent the balance
//! domain: monetary amounts, calendar months, and the input/output
//! documents of the balance pipeline.

pub mod entry;
pub mod money;
pub mod month;

pub use entry::{BalanceEntry, BalanceInput, BalanceSheet, DatedAmount};
pub use money::Money;
pub use month::Month;
