//! Delimiter placement rules
//!
//! Five independent flags governing where hyphens and underscores may
//! appear. A flag set to `true` permits the pattern.

/// Delimiter placement policy
///
/// `Default` is the strict rule set: every flag `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DelimiterRules {
    /// Permit `-` as the first or last character
    pub allow_leading_trailing_hyphens: bool,
    /// Permit `_` as the first or last character
    pub allow_leading_trailing_underscores: bool,
    /// Permit `--`
    pub allow_consecutive_hyphens: bool,
    /// Permit `__`
    pub allow_consecutive_underscores: bool,
    /// Permit `-_` and `_-`
    pub allow_adjacent_hyphen_underscore: bool,
}

impl DelimiterRules {
    /// All patterns rejected
    pub const fn strict() -> Self {
        Self {
            allow_leading_trailing_hyphens: false,
            allow_leading_trailing_underscores: false,
            allow_consecutive_hyphens: false,
            allow_consecutive_underscores: false,
            allow_adjacent_hyphen_underscore: false,
        }
    }

    /// All patterns permitted
    pub const fn permissive() -> Self {
        Self {
            allow_leading_trailing_hyphens: true,
            allow_leading_trailing_underscores: true,
            allow_consecutive_hyphens: true,
            allow_consecutive_underscores: true,
            allow_adjacent_hyphen_underscore: true,
        }
    }
}

/// Sparse set of delimiter flags; `None` keeps the baseline value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DelimiterOverrides {
    pub allow_leading_trailing_hyphens: Option<bool>,
    pub allow_leading_trailing_underscores: Option<bool>,
    pub allow_consecutive_hyphens: Option<bool>,
    pub allow_consecutive_underscores: Option<bool>,
    pub allow_adjacent_hyphen_underscore: Option<bool>,
}

impl DelimiterOverrides {
    /// Merge onto a baseline rule set
    pub fn apply_to(&self, base: DelimiterRules) -> DelimiterRules {
        DelimiterRules {
            allow_leading_trailing_hyphens: self
                .allow_leading_trailing_hyphens
                .unwrap_or(base.allow_leading_trailing_hyphens),
            allow_leading_trailing_underscores: self
                .allow_leading_trailing_underscores
                .unwrap_or(base.allow_leading_trailing_underscores),
            allow_consecutive_hyphens: self
                .allow_consecutive_hyphens
                .unwrap_or(base.allow_consecutive_hyphens),
            allow_consecutive_underscores: self
                .allow_consecutive_underscores
                .unwrap_or(base.allow_consecutive_underscores),
            allow_adjacent_hyphen_underscore: self
                .allow_adjacent_hyphen_underscore
                .unwrap_or(base.allow_adjacent_hyphen_underscore),
        }
    }
}

/// Build delimiter rules from overrides on top of the strict baseline
pub fn build_delimiter_rules(overrides: DelimiterOverrides) -> DelimiterRules {
    overrides.apply_to(DelimiterRules::strict())
}

/// Build the all-permissive rule set
pub const fn build_permissive_delimiter_rules() -> DelimiterRules {
    DelimiterRules::permissive()
}
