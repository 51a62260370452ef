// Error handling utilities for consistent error messages and exit codes

use crate::models::Locale;
use crate::utils::parse_timestamp;
use chrono::{DateTime, Utc};
use std::process;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, unreadable arguments, etc.
/// Internal errors (exit code 2) are reported by `main` from the returned error chain.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Validate that a string is not empty
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate a timestamp argument (e.g. `--now`)
pub fn validate_timestamp(value: &str, field_name: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(value).map_err(|e| format!("Invalid {}: {}", field_name, e))
}

/// Validate a `--locale` argument
pub fn validate_locale(value: &str) -> Result<Locale, String> {
    Locale::parse(value).map_err(|e| e.to_string())
}
