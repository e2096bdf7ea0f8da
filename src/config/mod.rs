//! Configuration module for fsutil.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument parsing and merging
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, DefaultsConfig, LoggingConfig, ReportingConfig};
pub use validation::{parse_mode, validate_config};
