//! Vietnamese grapheme-to-phoneme conversion.
//!
//! Syllables are decomposed against onset/nucleus/coda tables and reshaped
//! by dialect rules; words that are not Vietnamese syllables fall back to
//! letter spelling, subword segmentation, or a foreign-word backend.

pub mod backend;
pub mod error;
pub mod language;
pub mod normalize;
pub mod text;
pub mod types;

pub use backend::{ForeignBackend, TextNormalizer};
pub use error::{G2pError, Result};
pub use language::g2p::EnglishBackend;
pub use normalize::BasicNormalizer;
pub use text::{vig2p, Transcriber};
pub use types::{Decomposition, Dialect, G2pConfig, G2pSettings, ToneSystem};
