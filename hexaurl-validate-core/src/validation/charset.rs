//! Character composition checks

use super::length::char_budget;
use crate::{Composition, ErrorCode, Result, ValidationError};
use alloc::format;

/// Check that every character of a non-empty token is in `composition`
///
/// The empty string never matches: every composition requires at least
/// one character.
pub fn check_composition(input: &str, composition: Composition) -> Result<()> {
    if input.is_empty() || !input.chars().all(|c| composition.allows(c)) {
        return Err(ValidationError::new(
            ErrorCode::InvalidCharacter,
            format!(
                "Invalid character: only {} are allowed",
                composition.description()
            ),
        ));
    }
    Ok(())
}

/// Fast pre-screen before encoding
///
/// Only checks that the token fits the byte budget and is 7-bit ASCII.
/// Composition and delimiter rules are not looked at, so a `true` here does
/// not mean [`validate`](super::validate) would accept the token.
pub fn is_encoding_safe(input: &str, byte_size: usize) -> bool {
    input.encode_utf16().count() <= char_budget(byte_size) && input.is_ascii()
}
