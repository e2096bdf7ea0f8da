//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Highest meaningful directory mode (permission and special bits).
const MAX_DIR_MODE: u32 = 0o7777;

/// Accepted range for the reported error code.
const ERROR_CODE_RANGE: std::ops::RangeInclusive<u16> = 100..=599;

/// Log levels accepted in the configuration.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_dir_mode(config.defaults.dir_mode)?;
    validate_error_code(config.reporting.error_code)?;
    validate_log_level(&config.logging.level)?;

    Ok(())
}

/// Validate a directory mode.
pub fn validate_dir_mode(mode: u32) -> Result<()> {
    if mode > MAX_DIR_MODE {
        return Err(Error::ConfigValidation {
            field: "dir_mode".to_string(),
            message: format!("Mode {:o} is above {:o}", mode, MAX_DIR_MODE),
        });
    }

    Ok(())
}

/// Validate the error code handed to the sink.
pub fn validate_error_code(code: u16) -> Result<()> {
    if !ERROR_CODE_RANGE.contains(&code) {
        return Err(Error::ConfigValidation {
            field: "error_code".to_string(),
            message: format!(
                "Code {} must be between {} and {}",
                code,
                ERROR_CODE_RANGE.start(),
                ERROR_CODE_RANGE.end()
            ),
        });
    }

    Ok(())
}

/// Validate the configured log level.
pub fn validate_log_level(level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        return Err(Error::ConfigValidation {
            field: "level".to_string(),
            message: format!(
                "Unknown log level '{}'. Expected one of: {}",
                level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    Ok(())
}

/// Parse an octal mode string such as `755`, `0755` or `0o755`.
pub fn parse_mode(input: &str) -> Result<u32> {
    let input = input.trim();
    let digits = input
        .strip_prefix("0o")
        .or_else(|| input.strip_prefix("0O"))
        .unwrap_or(input);

    let mode = u32::from_str_radix(digits, 8).map_err(|_| Error::ConfigValidation {
        field: "mode".to_string(),
        message: format!("Invalid octal mode: '{}'", input),
    })?;

    validate_dir_mode(mode)?;
    Ok(mode)
}
