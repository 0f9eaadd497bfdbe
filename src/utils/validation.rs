use crate::utils::error::{CalcError, Result};

/// Smallest candy cost that still leaves a positive net cost per evolution.
pub const MIN_CURRENCY_PER_EVOLUTION: u32 = 2;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_minimum(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(CalcError::invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_currency_per_evolution(value: u32) -> Result<()> {
    validate_minimum("currency_per_evolution", value, MIN_CURRENCY_PER_EVOLUTION)
}

/// Parses a user-typed count. Negative numbers are reported as such rather
/// than as a generic parse failure.
pub fn parse_count(field_name: &str, raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| CalcError::invalid(field_name, trimmed, "Value must be a whole number"))?;

    count_from_i64(field_name, value)
}

/// Range-checks a count that arrived already typed, e.g. from TOML.
pub fn count_from_i64(field_name: &str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(CalcError::invalid(
            field_name,
            value,
            "Value must not be negative",
        ));
    }

    u32::try_from(value)
        .map_err(|_| CalcError::invalid(field_name, value, format!("Value must be at most {}", u32::MAX)))
}
