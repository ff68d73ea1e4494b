//! balance-cli - Command-line monthly balance sheet generator
//!
//! This library turns two unsorted collections of dated monetary entries
//! (revenue and expenses) into a single chronological balance series: one
//! net amount per calendar month from the earliest to the latest month
//! observed, with months that saw no activity reported as zero.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, balance entries)
//! - `pipeline`: The three-stage balance computation (aggregate, merge, gap-fill)
//! - `storage`: JSON file I/O layer
//! - `display`: Terminal rendering of balance sheets
//! - `export`: CSV export
//!
//! # Example
//!
//! ```rust,ignore
//! use balance_cli::models::BalanceInput;
//! use balance_cli::pipeline::generate_balance_sheet;
//!
//! let input: BalanceInput = balance_cli::storage::read_json_required("input.json")?;
//! let sheet = generate_balance_sheet(input);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod pipeline;
pub mod storage;

pub use error::BalanceError;
