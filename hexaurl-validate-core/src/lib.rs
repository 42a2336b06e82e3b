#![no_std]

//! HexaURL Validate Core - token validation rules
//!
//! This crate provides the configuration model, error taxonomy and the pure
//! validation engine for HexaURL tokens: short identifiers that are packed
//! into a fixed number of bytes at six bits per character.

extern crate alloc;

pub mod config;
pub mod error;
pub mod validation;

pub use config::{
    build_delimiter_rules, build_permissive_delimiter_rules, Composition, Config, ConfigOptions,
    DelimiterOverrides, DelimiterRules,
};
pub use error::*;
pub use validation::{char_budget, is_encoding_safe, validate, DEFAULT_BYTE_SIZE};
