//! Whole-text transcription: tokenize, classify, dispatch, join.

use std::sync::Arc;

use crate::backend::{ForeignBackend, TextNormalizer};
use crate::error::{G2pError, Result};
use crate::language::dispatch::WordDispatcher;
use crate::language::g2p::EnglishBackend;
use crate::language::phonemes::PhonemeTables;
use crate::normalize::BasicNormalizer;
use crate::types::{Dialect, G2pConfig, ToneSystem};

/// ASCII punctuation, in code point order.
pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

lazy_static::lazy_static! {
    static ref DEFAULT_BACKEND: Arc<EnglishBackend> = Arc::new(EnglishBackend::from_env());
}

/// What a whitespace-delimited token is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Copied to the output as-is.
    Punctuation,
    /// Read through the word dispatcher.
    Word,
}

/// Classify a token. Punctuation is any run of ASCII punctuation that
/// appears verbatim in [`ASCII_PUNCTUATION`]; words are all-alphabetic.
pub fn classify(token: &str) -> Result<TokenKind> {
    if !token.is_empty() && ASCII_PUNCTUATION.contains(token) {
        Ok(TokenKind::Punctuation)
    } else if !token.is_empty() && token.chars().all(char::is_alphabetic) {
        Ok(TokenKind::Word)
    } else {
        Err(G2pError::InvalidToken(token.to_string()))
    }
}

/// Converts running text to phonemes with a fixed configuration.
///
/// Holds no mutable state; one instance can serve any number of texts
/// from any number of threads.
#[derive(Clone)]
pub struct Transcriber {
    config: G2pConfig,
    tables: &'static PhonemeTables,
    backend: Arc<dyn ForeignBackend>,
    normalizer: Arc<dyn TextNormalizer>,
}

impl Transcriber {
    pub fn new(config: G2pConfig, backend: Arc<dyn ForeignBackend>) -> Self {
        Self {
            config,
            tables: PhonemeTables::vietnamese(),
            backend,
            normalizer: Arc::new(BasicNormalizer::new()),
        }
    }

    pub fn with_normalizer(mut self, normalizer: Arc<dyn TextNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn config(&self) -> &G2pConfig {
        &self.config
    }

    /// Transcribe a text. Words are joined with the word separator and
    /// punctuation tokens pass through unchanged. Any failing token fails
    /// the whole text.
    pub fn transcribe(&self, text: &str) -> Result<String> {
        let normalized;
        let text = if self.config.normalized {
            text
        } else {
            normalized = self.normalizer.normalize(text)?;
            normalized.as_str()
        };

        let dispatcher = WordDispatcher::new(self.tables, &self.config, self.backend.as_ref());
        let mut output = Vec::new();
        for token in text.split_whitespace() {
            let phonemes = match classify(token)? {
                TokenKind::Punctuation => token.to_string(),
                TokenKind::Word => dispatcher.phonemize(token)?,
            };
            if !phonemes.is_empty() {
                output.push(phonemes);
            }
        }

        log::debug!("Transcribed {} tokens", output.len());
        Ok(output.join(self.config.word_separator()))
    }

    /// Phonemes for a single word, skipping normalization and tokenizing.
    pub fn transcribe_word(&self, word: &str) -> Result<String> {
        WordDispatcher::new(self.tables, &self.config, self.backend.as_ref()).phonemize(word)
    }
}

/// Transcribe `text` with the northern dialect and the 8-tone system.
///
/// Foreign words go to an English lexicon read from `VIG2P_LEXICON` once
/// per process; without one they are transcribed by spelling rules.
pub fn vig2p(text: &str, separator: &str, normalized: bool) -> Result<String> {
    let mut config = G2pConfig::new(Dialect::North, ToneSystem::Cao, separator);
    config.normalized = normalized;
    let backend: Arc<dyn ForeignBackend> = DEFAULT_BACKEND.clone();
    Transcriber::new(config, backend).transcribe(text)
}
