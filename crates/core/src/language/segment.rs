//! Greedy right-to-left splitting of run-together syllables.
//!
//! Used for words that fail as a single syllable, e.g. "hoabinh" or
//! "bama". The scan grows a candidate leftward from the end of the word
//! for as long as it still converts, then commits the last good
//! conversion and starts a new candidate just left of it.

use crate::error::{G2pError, Result};
use crate::types::G2pConfig;

use super::phonemes::PhonemeTables;
use super::syllable::convert;

/// Split `word` into convertible pieces, joined left to right with the
/// word-internal separator.
///
/// A lone letter is converted through its lowercase letter name ("b" ->
/// "bờ"). A committed one-letter piece is only allowed right after the
/// first character of the word; anywhere else, and for a lone letter that
/// cannot be converted at all, the split fails with `SegmentationFailed`.
pub fn segment_subwords(word: &str, tables: &PhonemeTables, config: &G2pConfig) -> Result<String> {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let failed = || G2pError::SegmentationFailed(word.to_string());
    if chars.is_empty() {
        return Err(failed());
    }

    let mut segments: Vec<String> = Vec::new();
    let mut pending = String::new();
    let mut end = chars.len();
    let mut start = end - 1;

    loop {
        let single = end - start == 1;
        let candidate: String = if single {
            match tables.letter_name(chars[start]) {
                Some(name) => name.to_string(),
                None => chars[start].to_string(),
            }
        } else {
            chars[start..end].iter().collect()
        };

        // A bare coda is never a syllable of its own; keep growing.
        if tables.codas.contains_key(candidate.as_str()) {
            log::trace!("Skipping coda '{}' in '{}'", candidate, word);
            if start == 0 {
                break;
            }
            start -= 1;
            continue;
        }

        match convert(&candidate, tables, config) {
            Ok(phonemes) => {
                log::trace!("'{}' -> {}", candidate, phonemes);
                pending = phonemes;
                if start == 0 {
                    break;
                }
                start -= 1;
            }
            Err(G2pError::InvalidSyllable(_)) => {
                if single {
                    return Err(failed());
                }
                let committed_len = end - start - 1;
                if committed_len == 1 && start > 0 {
                    return Err(failed());
                }
                segments.push(std::mem::take(&mut pending));
                end = start + 1;
            }
            Err(e) => return Err(e),
        }
    }

    if !pending.is_empty() {
        segments.push(pending);
    }
    if segments.is_empty() {
        return Err(failed());
    }

    segments.reverse();
    Ok(segments.join(config.word_separator()))
}
