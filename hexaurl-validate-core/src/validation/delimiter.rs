//! Delimiter placement checks
//!
//! Evaluated in a fixed order; the first violation is reported.

use crate::{DelimiterRules, ErrorCode, Result, ValidationError};

/// Check hyphen and underscore placement against `rules`
pub fn check_delimiters(input: &str, rules: &DelimiterRules) -> Result<()> {
    if !rules.allow_leading_trailing_hyphens && (input.starts_with('-') || input.ends_with('-')) {
        return Err(ValidationError::new(
            ErrorCode::LeadingTrailingHyphen,
            "Cannot start or end with hyphens (-)",
        ));
    }

    if !rules.allow_leading_trailing_underscores
        && (input.starts_with('_') || input.ends_with('_'))
    {
        return Err(ValidationError::new(
            ErrorCode::LeadingTrailingUnderscore,
            "Cannot start or end with underscores (_)",
        ));
    }

    if !rules.allow_consecutive_hyphens && input.contains("--") {
        return Err(ValidationError::new(
            ErrorCode::ConsecutiveHyphens,
            "Cannot contain consecutive hyphens (--)",
        ));
    }

    if !rules.allow_consecutive_underscores && input.contains("__") {
        return Err(ValidationError::new(
            ErrorCode::ConsecutiveUnderscores,
            "Cannot contain consecutive underscores (__)",
        ));
    }

    if !rules.allow_adjacent_hyphen_underscore && (input.contains("-_") || input.contains("_-")) {
        return Err(ValidationError::new(
            ErrorCode::AdjacentHyphenUnderscore,
            "Cannot contain adjacent hyphen and underscore combinations (-_ or _-)",
        ));
    }

    Ok(())
}
