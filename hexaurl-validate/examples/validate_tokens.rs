//! Validate a list of tokens against settings loaded from JSON
//!
//! Usage: cargo run --example validate_tokens -- [settings.json] [token...]
//!
//! Without a settings file the default rules (16 bytes, min length 3,
//! alphanumerics and hyphens, strict delimiters) are used.

use hexaurl_validate::{SettingsError, ValidatorSettings};
use std::path::Path;

fn main() -> Result<(), SettingsError> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let settings = match args.first() {
        Some(first) if first.ends_with(".json") && Path::new(first).exists() => {
            let path = args.remove(0);
            ValidatorSettings::from_path(path)?
        }
        _ => ValidatorSettings::default(),
    };

    if args.is_empty() {
        args = ["abc-123", "ab", "abc_123", "-abc", "ab--cd"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    let validator = settings.into_validator();
    println!(
        "{} with {} bytes ({} characters)",
        validator.config(),
        validator.byte_size(),
        validator.char_budget()
    );

    for (token, result) in args.iter().zip(validator.validate_batch(&args)) {
        match result {
            Ok(()) => println!("  ok      {token}"),
            Err(err) => println!("  {:<7} {token}: {err} [{}]", "reject", err.code()),
        }
    }

    Ok(())
}
