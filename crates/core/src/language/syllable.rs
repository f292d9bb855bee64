//! Table-driven decomposition of a single Vietnamese syllable.

use unicode_normalization::UnicodeNormalization;

use crate::error::{G2pError, Result};
use crate::types::{Decomposition, G2pConfig};

use super::phonemes::{PhonemeTables, GI_ONSET, GLOTTAL_STOP, LABIALIZED_VELAR, LABIAL_GLIDE};
use super::rules::{self, SyllableShape};

/// Split a lowercase syllable into onset, nucleus, coda and tone.
///
/// Returns `InvalidSyllable` when the vowel cluster matches no table.
pub fn decompose(
    word: &str,
    tables: &PhonemeTables,
    config: &G2pConfig,
) -> Result<Decomposition> {
    if word.is_empty() {
        return Err(G2pError::EmptyWord);
    }

    let bare: Vec<char> = tables.strip_tones(word).chars().collect();
    let len = bare.len();
    let span = |from: usize, to: usize| -> String { bare[from..to].iter().collect() };

    let mut d = Decomposition::default();

    // Longest onset first; at least one character must remain.
    let mut onset_idx = 0;
    for n in [3, 2, 1] {
        if len > n {
            if let Some(onset) = tables.onsets.get(span(0, n).as_str()) {
                d.onset = onset.to_string();
                onset_idx = n;
                break;
            }
        }
    }

    let mut coda_idx = len;
    for n in [2, 1] {
        if len > n {
            if let Some(coda) = tables.codas.get(span(len - n, len).as_str()) {
                d.coda = coda.to_string();
                coda_idx = len - n;
                break;
            }
        }
    }

    let grapheme = if len > 2 && !d.coda.is_empty() && tables.gi.contains_key(span(0, 2).as_str())
    {
        d.onset = GI_ONSET.to_string();
        "i".to_string()
    } else {
        span(onset_idx, coda_idx.max(onset_idx))
    };

    let whole = span(0, len);
    if let Some(nucleus) = tables.nucleus.get(grapheme.as_str()) {
        if config.glottal && onset_idx == 0 && !tables.onsets.contains_key(span(0, 1).as_str()) {
            d.onset = GLOTTAL_STOP.to_string();
        }
        d.nucleus = nucleus.to_string();
    } else if let Some(nucleus) = tables.on_glides.get(grapheme.as_str()) {
        d.nucleus = nucleus.to_string();
        add_glide(&mut d.onset);
    } else if let Some(value) = tables.onoff_glides.get(grapheme.as_str()) {
        (d.nucleus, d.coda) = split_last(value);
        add_glide(&mut d.onset);
    } else if let Some(value) = tables.off_glides.get(grapheme.as_str()) {
        (d.nucleus, d.coda) = split_last(value);
    } else if let Some(value) = tables.gi.get(whole.as_str()) {
        (d.onset, d.nucleus) = split_first(value);
    } else if let Some(value) = tables.qu.get(whole.as_str()) {
        (d.onset, d.nucleus) = split_last(value);
    } else {
        return Err(G2pError::InvalidSyllable(word.to_string()));
    }

    let shape = SyllableShape { len, coda_idx };
    let d = rules::front_velars(d, &shape, config);
    let d = rules::monophthongize(d, config);
    let d = rules::assign_tone(d, tables.last_tone(word));
    Ok(rules::closed_syllable_adjustments(d, &shape, config))
}

/// Decompose a syllable and join its parts with the phoneme separator.
pub fn convert(word: &str, tables: &PhonemeTables, config: &G2pConfig) -> Result<String> {
    let lower = word.nfc().collect::<String>().to_lowercase();
    let d = decompose(&lower, tables, config)?;
    Ok(d.join(config.separator()))
}

fn add_glide(onset: &mut String) {
    if onset != LABIALIZED_VELAR {
        onset.push_str(LABIAL_GLIDE);
    }
}

/// Split off the last symbol: ("aj" -> "a", "j").
fn split_last(value: &str) -> (String, String) {
    let mut chars: Vec<char> = value.chars().collect();
    let last = chars.pop().map(String::from).unwrap_or_default();
    (chars.into_iter().collect(), last)
}

/// Split off the first symbol: ("zi" -> "z", "i").
fn split_first(value: &str) -> (String, String) {
    let mut chars = value.chars();
    let first = chars.next().map(String::from).unwrap_or_default();
    (first, chars.collect())
}
