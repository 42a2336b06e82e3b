//! Reusable validator binding a [`Config`] to a byte budget

use crate::{char_budget, Config, Result, ValidationError, DEFAULT_BYTE_SIZE};

/// A [`Config`] paired with the byte size of the target encoding
///
/// Cheap to copy and safe to share between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    config: Config,
    byte_size: usize,
}

impl Validator {
    /// Create a validator for the default 16-byte encoding
    pub fn new(config: Config) -> Self {
        Self {
            config,
            byte_size: DEFAULT_BYTE_SIZE,
        }
    }

    /// Validator using [`Config::minimal`]
    pub fn minimal() -> Self {
        Self::new(Config::minimal())
    }

    /// Set the byte size of the target encoding
    pub fn with_byte_size(mut self, byte_size: usize) -> Self {
        self.byte_size = byte_size;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// Characters that fit in the byte budget
    pub fn char_budget(&self) -> usize {
        char_budget(self.byte_size)
    }

    /// Run the full rule set against one token
    pub fn validate(&self, input: &str) -> Result<()> {
        let result = hexaurl_validate_core::validate(input, &self.config, self.byte_size);
        if let Err(err) = &result {
            tracing::trace!(code = %err.code(), input, "token rejected");
        }
        result
    }

    /// Length and ASCII pre-screen only, see [`crate::is_encoding_safe`]
    pub fn is_encoding_safe(&self, input: &str) -> bool {
        hexaurl_validate_core::is_encoding_safe(input, self.byte_size)
    }

    /// Validate many tokens, returning one outcome per input in input order
    ///
    /// Runs on the rayon thread pool when the `parallel` feature is enabled.
    pub fn validate_batch<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<Result<()>> {
        #[cfg(feature = "parallel")]
        let results: Vec<Result<()>> = {
            use rayon::prelude::*;
            inputs
                .par_iter()
                .map(|input| self.validate(input.as_ref()))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let results: Vec<Result<()>> = inputs
            .iter()
            .map(|input| self.validate(input.as_ref()))
            .collect();

        let rejected = results.iter().filter(|r| r.is_err()).count();
        tracing::debug!(
            total = results.len(),
            accepted = results.len() - rejected,
            rejected,
            "validated batch"
        );
        results
    }

    /// First rejected token in a batch, with its index
    pub fn first_rejection<S: AsRef<str> + Sync>(
        &self,
        inputs: &[S],
    ) -> Option<(usize, ValidationError)> {
        self.validate_batch(inputs)
            .into_iter()
            .enumerate()
            .find_map(|(index, result)| result.err().map(|err| (index, err)))
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
