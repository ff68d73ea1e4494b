//! Configuration and path management for balance-cli

pub mod paths;
pub mod settings;

pub use paths::BalancePaths;
pub use settings::Settings;
