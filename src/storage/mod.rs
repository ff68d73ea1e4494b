//! JSON file storage layer for balance-cli
//!
//! The I/O collaborator of the balance pipeline: reading the input document
//! from disk and writing results back out. A failed read is reported before
//! the pipeline runs; no partial balance sheet is ever produced.

pub mod file_io;

pub use file_io::{read_json_required, write_json_atomic};
