//! Validation engine for HexaURL tokens
//!
//! Pure functions with no I/O and no logging. [`validate`] runs the checks
//! in a fixed order and reports the first violation only:
//!
//! 1. Configuration against the byte budget
//! 2. Minimum, then maximum length
//! 3. Character composition
//! 4. Delimiter placement

pub mod charset;
pub mod delimiter;
pub mod length;

pub use charset::{check_composition, is_encoding_safe};
pub use delimiter::check_delimiters;
pub use length::{char_budget, check_budget, check_length, effective_max_length};

use crate::{Config, Result};

/// Byte size used when the caller has no specific budget
pub const DEFAULT_BYTE_SIZE: usize = 16;

/// Validate a token against `config` for a `byte_size`-byte encoding
///
/// Length is counted in UTF-16 code units. The byte budget always caps the
/// length, whatever `max_length` says.
pub fn validate(input: &str, config: &Config, byte_size: usize) -> Result<()> {
    let effective_max = effective_max_length(config, byte_size);
    check_budget(config, effective_max)?;
    check_length(input.encode_utf16().count(), config, effective_max)?;
    check_composition(input, config.composition())?;
    check_delimiters(input, &config.effective_delimiter_rules())
}
