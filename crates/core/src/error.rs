//! Error type shared by the conversion pipeline.

use thiserror::Error;

/// Everything that can go wrong while turning text into phonemes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum G2pError {
    /// No onset/nucleus/coda combination matched the syllable tables.
    #[error("Invalid Vietnamese word: {0}")]
    InvalidSyllable(String),

    /// The subword segmenter could not split a word into valid pieces.
    #[error("Cannot split word '{0}' into valid subwords")]
    SegmentationFailed(String),

    /// A whitespace-delimited token is neither punctuation nor alphabetic.
    #[error("Invalid word: {0}")]
    InvalidToken(String),

    /// Conflicting or missing tone-system toggles.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Input word cannot be empty")]
    EmptyWord,

    /// The foreign-word backend or the text normalizer failed.
    #[error("Backend error: {0}")]
    Backend(String),
}

impl G2pError {
    /// True for failures the word dispatcher answers with its next strategy.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            G2pError::InvalidSyllable(_) | G2pError::SegmentationFailed(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, G2pError>;
