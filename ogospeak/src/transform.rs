//! Transform rules: the Ogospeak word transformations
//!
//! Applied in a fixed priority order once a word has passed the skip rules.
//! Every rule works on the lower-cased word; output is always lower-case.

use crate::context::WordTranslator;

const VOWELS: &str = "aeiou";
const CONSONANTS: &str = "bcdfghjklmnpqrstvwxzy";

/// Words starting with a vowel get a "g" prefix, e.g. apple => gapple
pub struct VowelFirstTranslator;

impl WordTranslator for VowelFirstTranslator {
    fn translate(&self, word: &str) -> Option<String> {
        let lower = word.to_lowercase();
        match lower.chars().next() {
            Some(first) if VOWELS.contains(first) => Some(format!("g{}", lower)),
            _ => None,
        }
    }
}

/// Words starting with the consonant pair "xr" get a "ge" prefix,
/// e.g. xray => gexray
pub struct XrPrefixTranslator;

impl WordTranslator for XrPrefixTranslator {
    fn translate(&self, word: &str) -> Option<String> {
        let lower = word.to_lowercase();
        if lower.starts_with("xr") {
            Some(format!("ge{}", lower))
        } else {
            None
        }
    }
}

/// Words starting with a consonant sound have the sound moved to the end of
/// the word followed by "ogo", e.g. chair => airchogo.
///
/// A consonant sound directly followed by "qu" moves as one unit,
/// e.g. square => aresquogo; that case takes precedence over the plain
/// consonant rule.
pub struct ConsonantSoundTranslator;

impl WordTranslator for ConsonantSoundTranslator {
    fn translate(&self, word: &str) -> Option<String> {
        let lower = word.to_lowercase();
        let prefix = consonant_sound_prefix(&lower);
        if prefix.is_empty() {
            return None;
        }

        let prefix_qu = format!("{}qu", prefix);
        if let Some(rest) = lower.strip_prefix(&prefix_qu) {
            Some(format!("{}{}ogo", rest, prefix_qu))
        } else {
            lower
                .strip_prefix(&prefix)
                .map(|rest| format!("{}{}ogo", rest, prefix))
        }
    }
}

/// Leading consonant-sound prefix of a lower-cased word.
///
/// Plain consonants accumulate until the first vowel. A "q" needs a look at
/// the character after it: "qu" ends the sound (the pair is handled by the
/// caller), except at the very start of the word where the "q" itself is the
/// sound. A "q" followed by anything else is an ordinary consonant, and the
/// follower is re-examined so that runs like "qq" or "qk" walk one "q" at a
/// time.
fn consonant_sound_prefix(word: &str) -> String {
    let mut prefix = String::new();
    let mut chars = word.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == 'q' {
            match chars.peek() {
                // q is the last letter
                None => {
                    prefix.push('q');
                    break;
                }
                Some('u') if prefix.is_empty() => {
                    prefix.push('q');
                    break;
                }
                Some('u') => break,
                // not "qu": keep the q, re-examine the follower
                Some(_) => {
                    prefix.push('q');
                    continue;
                }
            }
        }

        if CONSONANTS.contains(ch) {
            prefix.push(ch);
        } else {
            break;
        }
    }

    prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_first() {
        let rule = VowelFirstTranslator;
        assert_eq!(rule.translate("apple"), Some("gapple".to_string()));
        assert_eq!(rule.translate("ear"), Some("gear".to_string()));
        assert_eq!(rule.translate("Orange"), Some("gorange".to_string()));
        assert_eq!(rule.translate("chair"), None);
        assert_eq!(rule.translate(""), None);
    }

    #[test]
    fn test_xr_prefix() {
        let rule = XrPrefixTranslator;
        assert_eq!(rule.translate("xray"), Some("gexray".to_string()));
        assert_eq!(rule.translate("XRiphone"), Some("gexriphone".to_string()));
        assert_eq!(rule.translate("xylophone"), None);
    }

    #[test]
    fn test_consonant_sound_prefix_plain_runs() {
        assert_eq!(consonant_sound_prefix("chair"), "ch");
        assert_eq!(consonant_sound_prefix("chewbacca"), "ch");
        assert_eq!(consonant_sound_prefix("context"), "c");
        assert_eq!(consonant_sound_prefix("strength"), "str");
        assert_eq!(consonant_sound_prefix("apple"), "");
    }

    #[test]
    fn test_consonant_sound_prefix_q_handling() {
        assert_eq!(consonant_sound_prefix("q"), "q");
        assert_eq!(consonant_sound_prefix("qu"), "q");
        assert_eq!(consonant_sound_prefix("quake"), "q");
        assert_eq!(consonant_sound_prefix("qqu"), "q");
        assert_eq!(consonant_sound_prefix("square"), "s");
        assert_eq!(consonant_sound_prefix("sqquare"), "sq");
        assert_eq!(consonant_sound_prefix("sssqqquuu"), "sssqq");
        assert_eq!(consonant_sound_prefix("qkite"), "qk");
    }

    #[test]
    fn test_consonant_sound_rule() {
        let rule = ConsonantSoundTranslator;
        assert_eq!(rule.translate("chair"), Some("airchogo".to_string()));
        assert_eq!(rule.translate("context"), Some("ontextcogo".to_string()));
        assert_eq!(rule.translate("chewbacca"), Some("ewbaccachogo".to_string()));
        assert_eq!(rule.translate("Mangos"), Some("angosmogo".to_string()));
    }

    #[test]
    fn test_consonant_sound_rule_qu_unit() {
        let rule = ConsonantSoundTranslator;
        assert_eq!(rule.translate("square"), Some("aresquogo".to_string()));
        assert_eq!(rule.translate("squared"), Some("aredsquogo".to_string()));
        assert_eq!(rule.translate("q"), Some("qogo".to_string()));
        assert_eq!(rule.translate("qu"), Some("uqogo".to_string()));
        assert_eq!(rule.translate("quake"), Some("uakeqogo".to_string()));
        assert_eq!(rule.translate("qqu"), Some("qquogo".to_string()));
        assert_eq!(rule.translate("sqquare"), Some("aresqquogo".to_string()));
        assert_eq!(rule.translate("sssqqquuu"), Some("uusssqqquogo".to_string()));
    }

    #[test]
    fn test_consonant_sound_rule_does_not_match_vowel_first() {
        let rule = ConsonantSoundTranslator;
        assert_eq!(rule.translate("apple"), None);
        assert_eq!(rule.translate("ear"), None);
    }
}
