//! Form input validation
//!
//! Everything here runs before a request is built, so a rejected value never
//! reaches the backend.

use crate::models::{UiError, UiResult};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Grid sizes the editor accepts, in pixels
pub const GRID_SIZE_RANGE: std::ops::RangeInclusive<i32> = 5..=50;
pub const DEFAULT_GRID_SIZE: i32 = 20;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn validate_email(email: &str) -> UiResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(UiError::validation_field("email", "Email is required"));
    }
    if !email_regex().is_match(email) {
        return Err(UiError::validation_field("email", "Enter a valid email address"));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> UiResult<()> {
    if password.is_empty() {
        return Err(UiError::validation_field("password", "Password is required"));
    }
    Ok(())
}

/// Column count typed into the auto-arrange prompt
pub fn parse_columns(input: &str) -> UiResult<u32> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| UiError::validation_field("columns", "Enter a whole number of columns"))?;
    if value < 1 {
        return Err(UiError::validation_field("columns", "Columns must be at least 1"));
    }
    u32::try_from(value)
        .map_err(|_| UiError::validation_field("columns", "Too many columns"))
}

/// Grid size field: clamped to the allowed range, unparsable input falls back to the default
pub fn parse_grid_size(input: &str) -> i32 {
    match input.trim().parse::<i32>() {
        Ok(value) if value != 0 => {
            value.clamp(*GRID_SIZE_RANGE.start(), *GRID_SIZE_RANGE.end())
        }
        _ => DEFAULT_GRID_SIZE,
    }
}

/// Check-in/check-out pair as `YYYY-MM-DD`; check-out must come after check-in
pub fn validate_stay(check_in: &str, check_out: &str) -> UiResult<()> {
    let parse = |field: &str, value: &str| {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|_| UiError::validation_field(field, "Use the YYYY-MM-DD format"))
    };
    let arrive = parse("check_in", check_in)?;
    let leave = parse("check_out", check_out)?;
    if leave <= arrive {
        return Err(UiError::validation_field("check_out", "Check-out must be after check-in"));
    }
    Ok(())
}
