//! English to Ogospeak translation
//!
//! Ogospeak is a phonetic constructed language: words starting with a vowel
//! gain a "g" prefix, words starting with "xr" gain a "ge" prefix, and any
//! other word has its leading consonant sound rotated to the end followed by
//! "ogo". Words in short form or containing non-letters are rejected before
//! any transformation is attempted.
//!
//! Every successful translation is remembered in an insert-once, ordered
//! history cache (one cache for words, one for sentences) that can be
//! exported as a single JSON document.
//!
//! # Workflow Example
//!
//! ```ignore
//! use ogospeak::{Context, History, HistoryDocument, translate_sentence, translate_word};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Build the rule set once, share the history for the process lifetime
//!     let context = Context::default();
//!     let history = Arc::new(History::new());
//!
//!     // 2. Translate
//!     let word = translate_word(&context, &history, "square").await?;
//!     assert_eq!(word, "aresquogo");
//!
//!     let sentence = translate_sentence(&context, &history, "an apple a day.").await?;
//!     assert_eq!(sentence, "gan gapple ga aydogo.");
//!
//!     // 3. Export everything translated so far
//!     let document = HistoryDocument::snapshot(&history);
//!     println!("{}", serde_json::to_string(&document)?);
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod error;
pub mod history;
pub mod pipeline;
pub mod skip;
pub mod transform;


// Re-export main types for convenient access
pub use context::{Context, WordSkipper, WordTranslator};
pub use error::{TranslateError, TranslateResult};
pub use history::{History, HistoryCache, HistoryDocument, HistoryEntry};
pub use pipeline::{translate_sentence, translate_word};
pub use skip::{InvalidWordSkipper, ShortFormSkipper};
pub use transform::{ConsonantSoundTranslator, VowelFirstTranslator, XrPrefixTranslator};
