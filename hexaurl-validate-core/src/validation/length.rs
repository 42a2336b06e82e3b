//! Length and byte budget checks
//!
//! Tokens are packed at six bits per character, so every 3 bytes hold
//! 4 characters.

use crate::{Config, ErrorCode, Result, ValidationError};
use alloc::format;

/// Number of characters that fit in `byte_size` bytes
///
/// Equal to `floor(byte_size * 4 / 3)`, saturating at `usize::MAX`.
pub const fn char_budget(byte_size: usize) -> usize {
    (byte_size / 3)
        .saturating_mul(4)
        .saturating_add(byte_size % 3 * 4 / 3)
}

/// Configured maximum clamped to the byte budget
///
/// A maximum above the budget is silently lowered, never reported.
pub fn effective_max_length(config: &Config, byte_size: usize) -> usize {
    let budget = char_budget(byte_size);
    match config.max_length() {
        Some(max) => max.min(budget),
        None => budget,
    }
}

/// Reject configs whose minimum cannot fit in the effective maximum
pub fn check_budget(config: &Config, effective_max: usize) -> Result<()> {
    match config.min_length() {
        Some(min) if effective_max < min => Err(ValidationError::new(
            ErrorCode::InvalidConfig,
            format!("Maximum length ({effective_max}) cannot be less than minimum length ({min})"),
        )),
        _ => Ok(()),
    }
}

/// Check a token length against the minimum and the effective maximum
pub fn check_length(len: usize, config: &Config, effective_max: usize) -> Result<()> {
    if let Some(min) = config.min_length() {
        if len < min {
            return Err(ValidationError::new(
                ErrorCode::StringTooShort,
                format!("Too short: minimum length is {min} characters"),
            ));
        }
    }

    if len > effective_max {
        return Err(ValidationError::new(
            ErrorCode::StringTooLong,
            format!("Too long: maximum length is {effective_max} characters"),
        ));
    }

    Ok(())
}
