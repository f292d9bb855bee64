//! Reading a word letter by letter.

use crate::error::Result;
use crate::types::G2pConfig;

use super::phonemes::PhonemeTables;
use super::syllable::convert;

/// True if the word has cased letters and all of them are uppercase.
pub fn is_all_uppercase(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// True if the word has cased letters and all of them are lowercase.
pub fn is_all_lowercase(word: &str) -> bool {
    word.chars().any(char::is_lowercase) && !word.chars().any(char::is_uppercase)
}

/// Spell a word with Vietnamese letter names.
///
/// Uppercase words use the alphabet-reading names ("W" -> "vê kép"),
/// lowercase words the syllabic ones ("b" -> "bờ"). A mixed-case word
/// spells to an empty string. Letters without a name go to the syllable
/// converter as-is and may fail there.
pub fn spell_letters(word: &str, tables: &PhonemeTables, config: &G2pConfig) -> Result<String> {
    let names = if is_all_uppercase(word) {
        &tables.letters_upper
    } else if is_all_lowercase(word) {
        &tables.letters_lower
    } else {
        log::debug!("Not spelling mixed-case word '{}'", word);
        return Ok(String::new());
    };

    let mut syllables = Vec::new();
    for letter in word.chars() {
        match names.get(&letter) {
            Some(name) => syllables.extend(name.split_whitespace().map(str::to_string)),
            None => syllables.push(letter.to_string()),
        }
    }

    let phonemes = syllables
        .iter()
        .map(|s| convert(s, tables, config))
        .collect::<Result<Vec<_>>>()?;
    Ok(phonemes.join(config.word_separator()))
}
