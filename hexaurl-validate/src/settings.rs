//! JSON settings for building a [`Validator`]
//!
//! ```json
//! {
//!   "byte_size": 16,
//!   "config": {
//!     "min_length": 3,
//!     "max_length": null,
//!     "composition": "alphanumeric_hyphen",
//!     "delimiter": { "allow_consecutive_hyphens": true }
//!   }
//! }
//! ```
//!
//! Every key is optional. Inverted length bounds are rejected while parsing.

use crate::{Config, SettingsError, Validator, DEFAULT_BYTE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorSettings {
    pub config: Config,
    pub byte_size: usize,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            config: Config::default(),
            byte_size: DEFAULT_BYTE_SIZE,
        }
    }
}

impl ValidatorSettings {
    pub fn from_json_str(raw: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(raw)?;
        tracing::debug!(
            config = %settings.config,
            byte_size = settings.byte_size,
            "parsed validator settings"
        );
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading validator settings");
        Self::from_json_str(&raw)
    }

    pub fn into_validator(self) -> Validator {
        Validator::new(self.config).with_byte_size(self.byte_size)
    }
}
