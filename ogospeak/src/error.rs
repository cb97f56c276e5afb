/// Error types for the translation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Word is in short form (a contraction like "don't" or "I'm")
    ShortForm { word: String },
    /// Word is not made of one or more ASCII letters
    InvalidWord { word: String },
    /// No transform rule produced an output for the word
    NoRuleMatched { word: String },
    /// A word inside a sentence failed to translate
    Sentence {
        sentence: String,
        source: Box<TranslateError>,
    },
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::ShortForm { word } => write!(f, "{}: is in short form", word),
            TranslateError::InvalidWord { word } => {
                write!(f, "{}: must contain only letters a-z or A-Z", word)
            }
            TranslateError::NoRuleMatched { word } => {
                write!(f, "{}: was not matched by any of the translators", word)
            }
            TranslateError::Sentence { source, .. } => {
                write!(f, "could not translate sentence: {}", source)
            }
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslateError::Sentence { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;
