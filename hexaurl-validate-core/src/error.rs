//! Error types for HexaURL validation

use alloc::string::String;
use thiserror::Error;

/// Closed set of failure kinds
///
/// Callers branch on the code, never on message text. The discriminants are
/// stable and shared with the byte-level encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ErrorCode {
    StringTooLong = 0,
    StringTooShort = 1,
    /// Raised by the encoder only
    BytesTooLong = 2,
    /// Raised by the encoder only
    BytesTooShort = 3,
    InvalidCharacter = 4,
    InvalidConfig = 5,
    /// Raised by the encoder only
    InvalidLength = 6,
    LeadingTrailingHyphen = 7,
    LeadingTrailingUnderscore = 8,
    ConsecutiveHyphens = 9,
    ConsecutiveUnderscores = 10,
    AdjacentHyphenUnderscore = 11,
}

impl ErrorCode {
    /// Every code in discriminant order
    pub const ALL: [ErrorCode; 12] = [
        ErrorCode::StringTooLong,
        ErrorCode::StringTooShort,
        ErrorCode::BytesTooLong,
        ErrorCode::BytesTooShort,
        ErrorCode::InvalidCharacter,
        ErrorCode::InvalidConfig,
        ErrorCode::InvalidLength,
        ErrorCode::LeadingTrailingHyphen,
        ErrorCode::LeadingTrailingUnderscore,
        ErrorCode::ConsecutiveHyphens,
        ErrorCode::ConsecutiveUnderscores,
        ErrorCode::AdjacentHyphenUnderscore,
    ];

    /// Codes reserved for the byte encoder/decoder
    ///
    /// The string-level engine never produces these.
    pub const fn is_encoding_layer(&self) -> bool {
        matches!(
            self,
            ErrorCode::BytesTooLong | ErrorCode::BytesTooShort | ErrorCode::InvalidLength
        )
    }

    /// Name of the code as it appears in logs and serialized reports
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::StringTooLong => "StringTooLong",
            ErrorCode::StringTooShort => "StringTooShort",
            ErrorCode::BytesTooLong => "BytesTooLong",
            ErrorCode::BytesTooShort => "BytesTooShort",
            ErrorCode::InvalidCharacter => "InvalidCharacter",
            ErrorCode::InvalidConfig => "InvalidConfig",
            ErrorCode::InvalidLength => "InvalidLength",
            ErrorCode::LeadingTrailingHyphen => "LeadingTrailingHyphen",
            ErrorCode::LeadingTrailingUnderscore => "LeadingTrailingUnderscore",
            ErrorCode::ConsecutiveHyphens => "ConsecutiveHyphens",
            ErrorCode::ConsecutiveUnderscores => "ConsecutiveUnderscores",
            ErrorCode::AdjacentHyphenUnderscore => "AdjacentHyphenUnderscore",
        }
    }
}

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected token: which rule failed and a human-readable explanation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    code: ErrorCode,
    message: String,
}

impl ValidationError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while constructing a [`Config`](crate::Config)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum length ({min}) cannot be greater than maximum length ({max})")]
    LengthBoundsInverted { min: usize, max: usize },
}

impl ConfigError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            ConfigError::LengthBoundsInverted { .. } => ErrorCode::InvalidConfig,
        }
    }
}

impl From<ConfigError> for ValidationError {
    fn from(err: ConfigError) -> Self {
        ValidationError::new(err.code(), alloc::format!("{err}"))
    }
}

/// Result type for HexaURL validation
pub type Result<T, E = ValidationError> = core::result::Result<T, E>;
