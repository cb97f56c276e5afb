//! Skip rules: predicates that reject untranslatable words
//!
//! Evaluated before any transform rule. The first rule to reject a word
//! decides the failure reported to the caller.

use regex::Regex;

use crate::context::WordSkipper;
use crate::error::{TranslateError, TranslateResult};

/// Rejects words in short form, e.g. "don't", "I'm"
pub struct ShortFormSkipper {
    pattern: Regex,
}

impl ShortFormSkipper {
    pub fn new() -> Self {
        ShortFormSkipper {
            // letter, apostrophe, lowercase letter
            pattern: Regex::new(r"[a-zA-Z]'[a-z]").unwrap(),
        }
    }
}

impl Default for ShortFormSkipper {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSkipper for ShortFormSkipper {
    fn check(&self, word: &str) -> TranslateResult<()> {
        if self.pattern.is_match(word) {
            return Err(TranslateError::ShortForm {
                word: word.to_string(),
            });
        }
        Ok(())
    }
}

/// Rejects words which do not contain only letters
///
/// Digits, punctuation, embedded whitespace and the empty string all fail.
pub struct InvalidWordSkipper {
    pattern: Regex,
}

impl InvalidWordSkipper {
    pub fn new() -> Self {
        InvalidWordSkipper {
            pattern: Regex::new(r"^[a-zA-Z]+$").unwrap(),
        }
    }
}

impl Default for InvalidWordSkipper {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSkipper for InvalidWordSkipper {
    fn check(&self, word: &str) -> TranslateResult<()> {
        if !self.pattern.is_match(word) {
            return Err(TranslateError::InvalidWord {
                word: word.to_string(),
            });
        }
        Ok(())
    }
}
