//! Rule capabilities and the rule set passed to every pipeline call
//!
//! Rules are held as ordered lists in a [`Context`] value that is built once
//! at startup and passed by reference into every translation. There is no
//! global default: alternate rule sets can be substituted freely, which keeps
//! tests free of shared mutable state.

use crate::error::TranslateResult;
use crate::skip::{InvalidWordSkipper, ShortFormSkipper};
use crate::transform::{ConsonantSoundTranslator, VowelFirstTranslator, XrPrefixTranslator};

/// A rule that can reject a word before any transformation is attempted
///
/// `Err` means "skip this word", carrying the reason; `Ok(())` lets the word
/// continue to the next rule. Skippers receive the word exactly as handed to
/// the pipeline (trimmed, original casing).
pub trait WordSkipper: Send + Sync {
    fn check(&self, word: &str) -> TranslateResult<()>;
}

/// A rule that attempts to produce the Ogospeak form of a word
///
/// `Some` is the transformed word and ends the rule scan; `None` means the
/// rule does not apply and the next rule is tried.
pub trait WordTranslator: Send + Sync {
    fn translate(&self, word: &str) -> Option<String>;
}

/// Ordered skip and transform rule sets
///
/// Both lists apply first-match-wins semantics: the first skipper to reject
/// a word decides the failure, and the first translator to return a result
/// decides the translation.
pub struct Context {
    pub skippers: Vec<Box<dyn WordSkipper>>,
    pub translators: Vec<Box<dyn WordTranslator>>,
}

impl Context {
    pub fn new(
        skippers: Vec<Box<dyn WordSkipper>>,
        translators: Vec<Box<dyn WordTranslator>>,
    ) -> Self {
        Context {
            skippers,
            translators,
        }
    }
}

impl Default for Context {
    /// The reference rule set, in priority order.
    fn default() -> Self {
        Context {
            skippers: vec![
                Box::new(ShortFormSkipper::new()),
                Box::new(InvalidWordSkipper::new()),
            ],
            translators: vec![
                Box::new(VowelFirstTranslator),
                Box::new(XrPrefixTranslator),
                Box::new(ConsonantSoundTranslator),
            ],
        }
    }
}
