//! Collaborators the converter delegates to.

use crate::error::Result;

/// Pronunciations for words that are not Vietnamese syllables.
pub trait ForeignBackend: Send + Sync {
    /// True if the word has an entry in the pronunciation lexicon.
    fn contains(&self, word: &str) -> bool;

    /// Phonemes of `word`, separated by `phone_separator`, with
    /// `word_separator` between words if the backend splits it further.
    fn transcribe(&self, word: &str, phone_separator: &str, word_separator: &str)
        -> Result<String>;

    /// True if a known word is pronounced exactly as its letters read one
    /// by one ("FBI", "USA").
    fn is_letter_by_letter(&self, word: &str) -> Result<bool> {
        if !self.contains(word) {
            return Ok(false);
        }
        let whole = self.transcribe(word, "", "")?;
        let mut spelled = String::new();
        for letter in word.chars() {
            spelled.push_str(&self.transcribe(&letter.to_string(), "", "")?);
        }
        Ok(whole == spelled)
    }
}

/// Rewrites raw text into whitespace-separated words and punctuation.
///
/// Implementations must be idempotent and keep punctuation marks.
pub trait TextNormalizer: Send + Sync {
    fn normalize(&self, text: &str) -> Result<String>;
}
