//! Choosing how to read one word.
//!
//! Strategies are tried in a fixed order and the first one that produces a
//! reading wins. Invalid-syllable and segmentation failures move on to the
//! next strategy; any other error aborts.

use crate::backend::ForeignBackend;
use crate::error::{G2pError, Result};
use crate::types::G2pConfig;

use super::phonemes::PhonemeTables;
use super::segment::segment_subwords;
use super::spell::{is_all_uppercase, spell_letters};
use super::syllable::convert;

/// One way of reading a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One-character words are read by their letter name.
    SingleLetter,
    /// The whole word is one Vietnamese syllable.
    Syllable,
    /// Known words spoken letter by letter in English ("FBI").
    EnglishSpelling,
    /// Words with an entry in the foreign lexicon.
    ForeignLexicon,
    /// All-uppercase words are abbreviations.
    Abbreviation,
    /// Several syllables written without spaces.
    Subwords,
    /// Anything left goes to the foreign backend.
    ForeignFallback,
}

/// Strategy priority, highest first.
pub const STRATEGIES: [Strategy; 7] = [
    Strategy::SingleLetter,
    Strategy::Syllable,
    Strategy::EnglishSpelling,
    Strategy::ForeignLexicon,
    Strategy::Abbreviation,
    Strategy::Subwords,
    Strategy::ForeignFallback,
];

pub struct WordDispatcher<'a> {
    tables: &'a PhonemeTables,
    config: &'a G2pConfig,
    backend: &'a dyn ForeignBackend,
}

impl<'a> WordDispatcher<'a> {
    pub fn new(
        tables: &'a PhonemeTables,
        config: &'a G2pConfig,
        backend: &'a dyn ForeignBackend,
    ) -> Self {
        Self {
            tables,
            config,
            backend,
        }
    }

    /// Phonemes for one alphabetic word.
    pub fn phonemize(&self, word: &str) -> Result<String> {
        self.phonemize_with(word).map(|(_, phonemes)| phonemes)
    }

    /// Phonemes for one word, together with the strategy that produced them.
    pub fn phonemize_with(&self, word: &str) -> Result<(Strategy, String)> {
        if word.is_empty() {
            return Err(G2pError::EmptyWord);
        }
        for strategy in STRATEGIES {
            if let Some(phonemes) = self.attempt(strategy, word)? {
                log::debug!("'{}' read with {:?}", word, strategy);
                return Ok((strategy, phonemes));
            }
        }
        Err(G2pError::SegmentationFailed(word.to_string()))
    }

    fn attempt(&self, strategy: Strategy, word: &str) -> Result<Option<String>> {
        let (tables, config) = (self.tables, self.config);
        match strategy {
            Strategy::SingleLetter if word.chars().count() == 1 => {
                recover(spell_letters(word, tables, config))
            }
            Strategy::Syllable => recover(convert(word, tables, config)),
            Strategy::EnglishSpelling => {
                if self.backend.is_letter_by_letter(word)? {
                    recover(spell_letters(word, tables, config))
                } else {
                    Ok(None)
                }
            }
            Strategy::ForeignLexicon if self.backend.contains(word) => self.transcribe(word),
            Strategy::Abbreviation if is_all_uppercase(word) => {
                recover(spell_letters(word, tables, config))
            }
            Strategy::Subwords => recover(segment_subwords(word, tables, config)),
            Strategy::ForeignFallback => self.transcribe(word),
            _ => Ok(None),
        }
    }

    fn transcribe(&self, word: &str) -> Result<Option<String>> {
        self.backend
            .transcribe(word, self.config.separator(), self.config.word_separator())
            .map(Some)
    }
}

/// Turn a recoverable failure into "try the next strategy".
fn recover(result: Result<String>) -> Result<Option<String>> {
    match result {
        Ok(phonemes) => Ok(Some(phonemes)),
        Err(e) if e.is_recoverable() => {
            log::debug!("{}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
