//! HexaURL Validate - token validation for 6-bit packed identifiers
//!
//! This library checks short identifier strings before they are handed to a
//! HexaURL encoder, reporting exactly which rule a rejected token broke.
//!
//! ## Architecture
//!
//! - **hexaurl-validate-core**: configuration model, error taxonomy and the
//!   pure validation engine (no I/O, no logging)
//! - **hexaurl-validate**: reusable validators, parallel batch checks and
//!   JSON settings loading
//!
//! ## Quick Start
//!
//! ```rust
//! use hexaurl_validate::{ErrorCode, Validator};
//!
//! let validator = Validator::default();
//! assert!(validator.validate("abc-123").is_ok());
//!
//! let err = validator.validate("ab--cd").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::ConsecutiveHyphens);
//! ```

// Re-export the core rules and error taxonomy
pub use hexaurl_validate_core::{
    build_delimiter_rules, build_permissive_delimiter_rules, char_budget, is_encoding_safe,
    validate, Composition, Config, ConfigError, ConfigOptions, DelimiterOverrides,
    DelimiterRules, ErrorCode, Result, ValidationError, DEFAULT_BYTE_SIZE,
};

pub mod error;
pub mod settings;
pub mod validator;

pub use error::SettingsError;
pub use settings::ValidatorSettings;
pub use validator::Validator;
