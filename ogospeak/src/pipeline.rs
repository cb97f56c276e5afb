//! The translation pipeline: skip rules, then transform rules, then history
//!
//! Rule evaluation is pure and stateless, so any number of callers may run
//! in parallel. Successful translations are recorded in the history caches
//! by fire-and-forget tasks; the caller never waits on the write and its
//! outcome never reaches the returned result.

use std::sync::Arc;

use crate::context::Context;
use crate::error::{TranslateError, TranslateResult};
use crate::history::History;

/// Translate a single word and record the result in the word history.
///
/// Surrounding whitespace is trimmed before the rules run. The recorded key
/// is the trimmed original word.
pub async fn translate_word(
    context: &Context,
    history: &Arc<History>,
    word: &str,
) -> TranslateResult<String> {
    let word = word.trim();
    let translated = apply_rules(context, word)?;

    let history = Arc::clone(history);
    let original = word.to_string();
    let recorded = translated.clone();
    tokio::spawn(async move {
        history.words.insert(original, recorded);
    });

    Ok(translated)
}

/// Translate a whole sentence and record the result in the sentence history.
///
/// Words are split on single spaces; runs of spaces collapse. The final
/// word's trailing character is treated as punctuation: it is stripped
/// before translation and re-appended, unseparated, afterwards. The first
/// word failure aborts the whole sentence with no partial output.
pub async fn translate_sentence(
    context: &Context,
    history: &Arc<History>,
    sentence: &str,
) -> TranslateResult<String> {
    let words: Vec<&str> = sentence.split(' ').filter(|word| !word.is_empty()).collect();

    let mut translated_sentence = String::new();
    for (idx, word) in words.iter().enumerate() {
        let is_last = idx + 1 == words.len();

        let (word, punctuation) = if is_last {
            let mut chars = word.chars();
            let punctuation = chars.next_back();
            (chars.as_str(), punctuation)
        } else {
            (*word, None)
        };

        let translated =
            apply_rules(context, word).map_err(|source| TranslateError::Sentence {
                sentence: sentence.to_string(),
                source: Box::new(source),
            })?;

        translated_sentence.push_str(&translated);
        match punctuation {
            Some(mark) => translated_sentence.push(mark),
            None if !is_last => translated_sentence.push(' '),
            None => {}
        }
    }

    let history = Arc::clone(history);
    let original = sentence.to_string();
    let recorded = translated_sentence.clone();
    tokio::spawn(async move {
        history.sentences.insert(original, recorded);
    });

    Ok(translated_sentence)
}

/// Run the skip rules, then the transform rules, first match wins.
pub(crate) fn apply_rules(context: &Context, word: &str) -> TranslateResult<String> {
    for skipper in &context.skippers {
        skipper.check(word)?;
    }

    for translator in &context.translators {
        if let Some(translated) = translator.translate(word) {
            return Ok(translated);
        }
    }

    Err(TranslateError::NoRuleMatched {
        word: word.to_string(),
    })
}
