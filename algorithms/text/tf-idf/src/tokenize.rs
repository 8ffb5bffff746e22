use regex::Regex;
use std::sync::LazyLock;

use crate::TfIdfError;
use crate::stop_words::StopWords;

/// Word units of two or more word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

static DEFAULT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_TOKEN_PATTERN).expect("default token pattern is valid"));

/// Splits text into lowercase word tokens and drops stop words.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    stop_words: StopWords,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}

impl Tokenizer {
    /// Creates a tokenizer using the default word pattern.
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
            stop_words,
        }
    }

    /// Creates a tokenizer with a custom token pattern.
    ///
    /// # Errors
    ///
    /// Returns `TfIdfError::InvalidPattern` if `pattern` does not compile.
    pub fn with_pattern(pattern: &str, stop_words: StopWords) -> Result<Self, TfIdfError> {
        let pattern =
            Regex::new(pattern).map_err(|e| TfIdfError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            pattern,
            stop_words,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(token))
            .map(str::to_string)
            .collect()
    }
}
