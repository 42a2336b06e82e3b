//! Validation configuration for HexaURL tokens
//!
//! A [`Config`] is an immutable value describing length bounds, the allowed
//! character set and the delimiter placement rules. It is built once and
//! reused across validation calls.

pub mod composition;
pub mod delimiter;

pub use composition::Composition;
pub use delimiter::{
    build_delimiter_rules, build_permissive_delimiter_rules, DelimiterOverrides, DelimiterRules,
};

use crate::ConfigError;

/// Acceptance rules for HexaURL tokens
///
/// Invariant: when both bounds are present, `min_length <= max_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConfig"))]
pub struct Config {
    min_length: Option<usize>,
    max_length: Option<usize>,
    composition: Composition,
    delimiter: Option<DelimiterRules>,
}

impl Config {
    /// Minimum length applied when none is given
    pub const DEFAULT_MIN_LENGTH: usize = 3;

    /// Create a config, checking the length bounds
    ///
    /// `None` means the bound or rule set is absent. An absent maximum is
    /// derived from the byte budget at validation time; absent delimiter
    /// rules fall back to [`DelimiterRules::strict`].
    pub const fn new(
        min_length: Option<usize>,
        max_length: Option<usize>,
        composition: Composition,
        delimiter: Option<DelimiterRules>,
    ) -> Result<Self, ConfigError> {
        if let (Some(min), Some(max)) = (min_length, max_length) {
            if min > max {
                return Err(ConfigError::LengthBoundsInverted { min, max });
            }
        }

        Ok(Self {
            min_length,
            max_length,
            composition,
            delimiter,
        })
    }

    /// Create a config from a sparse option set, filling in defaults
    pub fn create(options: ConfigOptions) -> Result<Self, ConfigError> {
        Self::new(
            Some(options.min_length.unwrap_or(Self::DEFAULT_MIN_LENGTH)),
            options.max_length,
            options.composition.unwrap_or_default(),
            options.delimiter,
        )
    }

    /// Relaxed preset: no length bounds, hyphens and underscores allowed
    /// anywhere
    pub const fn minimal() -> Self {
        Self {
            min_length: None,
            max_length: None,
            composition: Composition::AlphanumericHyphenUnderscore,
            delimiter: Some(DelimiterRules::permissive()),
        }
    }

    pub const fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub const fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub const fn composition(&self) -> Composition {
        self.composition
    }

    /// Delimiter rules as configured, `None` when left to the default
    pub const fn delimiter(&self) -> Option<DelimiterRules> {
        self.delimiter
    }

    /// Delimiter rules the engine applies
    pub const fn effective_delimiter_rules(&self) -> DelimiterRules {
        match self.delimiter {
            Some(rules) => rules,
            None => DelimiterRules::strict(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_length: Some(Self::DEFAULT_MIN_LENGTH),
            max_length: None,
            composition: Composition::default(),
            delimiter: None,
        }
    }
}

impl core::fmt::Display for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Config(min_length=")?;
        write_bound(f, self.min_length)?;
        write!(f, ", max_length=")?;
        write_bound(f, self.max_length)?;
        write!(f, ", composition={}, delimiter=", self.composition)?;
        match self.delimiter {
            Some(rules) => write!(f, "{rules:?})"),
            None => write!(f, "default)"),
        }
    }
}

fn write_bound(f: &mut core::fmt::Formatter<'_>, bound: Option<usize>) -> core::fmt::Result {
    match bound {
        Some(value) => write!(f, "{value}"),
        None => f.write_str("none"),
    }
}

/// Sparse options for [`Config::create`]
///
/// Omitted fields take the defaults: minimum length 3, no maximum,
/// [`Composition::AlphanumericHyphen`], strict delimiter rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigOptions {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub composition: Option<Composition>,
    pub delimiter: Option<DelimiterRules>,
}

impl ConfigOptions {
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = Some(composition);
        self
    }

    pub fn with_delimiter(mut self, delimiter: DelimiterRules) -> Self {
        self.delimiter = Some(delimiter);
        self
    }
}

// Missing `min_length` takes the default; an explicit `null` removes it.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConfig {
    #[serde(default = "default_min_length")]
    min_length: Option<usize>,
    #[serde(default)]
    max_length: Option<usize>,
    #[serde(default)]
    composition: Composition,
    #[serde(default)]
    delimiter: Option<DelimiterRules>,
}

#[cfg(feature = "serde")]
fn default_min_length() -> Option<usize> {
    Some(Config::DEFAULT_MIN_LENGTH)
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Config::new(raw.min_length, raw.max_length, raw.composition, raw.delimiter)
    }
}
