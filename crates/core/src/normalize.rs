//! Minimal text normalization ahead of transcription.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::backend::TextNormalizer;
use crate::error::Result;

/// Vietnamese names of the digits 0-9.
pub const DIGIT_NAMES: [&str; 10] = [
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

/// Splits text into words and single punctuation marks.
///
/// Letters are kept with their case, each ASCII digit becomes its
/// Vietnamese name, and every punctuation mark is set apart as its own
/// token. Typographic marks are folded to ASCII ("…" to ". . .", dashes to
/// "-", curly quotes to straight ones). Anything else separates words.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicNormalizer;

impl BasicNormalizer {
    pub fn new() -> Self {
        Self
    }
}

fn flush(word: &mut String, tokens: &mut Vec<String>) {
    if !word.is_empty() {
        tokens.push(std::mem::take(word));
    }
}

fn fold_punctuation(c: char) -> Option<&'static str> {
    let folded = match c {
        '…' => "...",
        '—' | '–' | '‐' | '‑' => "-",
        '“' | '”' | '„' | '«' | '»' => "\"",
        '‘' | '’' | '‚' => "'",
        _ => return None,
    };
    Some(folded)
}

impl TextNormalizer for BasicNormalizer {
    fn normalize(&self, text: &str) -> Result<String> {
        let mut tokens: Vec<String> = Vec::new();
        let mut word = String::new();
        for c in text.nfc() {
            if c.is_alphabetic() || (is_combining_mark(c) && !word.is_empty()) {
                word.push(c);
                continue;
            }
            flush(&mut word, &mut tokens);

            if let Some(digit) = c.to_digit(10).filter(|_| c.is_ascii_digit()) {
                tokens.push(DIGIT_NAMES[digit as usize].to_string());
            } else if c.is_ascii_punctuation() {
                tokens.push(c.to_string());
            } else if let Some(folded) = fold_punctuation(c) {
                tokens.extend(folded.chars().map(String::from));
            }
        }
        flush(&mut word, &mut tokens);

        let normalized = tokens.join(" ");
        log::trace!("Normalized '{}' -> '{}'", text, normalized);
        Ok(normalized)
    }
}
