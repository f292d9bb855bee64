//! English pronunciations for foreign words.
//!
//! Known words come from a CMU Pronouncing Dictionary loaded at runtime;
//! anything else goes through a small letter/digraph rule set. ARPABET
//! output is mapped to IPA so it can sit next to Vietnamese syllables.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

use crate::backend::ForeignBackend;
use crate::error::Result;

/// Environment variable naming a CMU dictionary file for the default backend.
pub const LEXICON_ENV: &str = "VIG2P_LEXICON";

lazy_static::lazy_static! {
    /// ARPABET base symbol -> IPA.
    static ref ARPABET_TO_IPA: HashMap<&'static str, &'static str> = [
        // Vowels
        ("AA", "ɑ"), ("AE", "æ"), ("AH", "ʌ"), ("AO", "ɔ"), ("AW", "aʊ"),
        ("AY", "aɪ"), ("EH", "ɛ"), ("ER", "ɝ"), ("EY", "eɪ"), ("IH", "ɪ"),
        ("IY", "i"), ("OW", "oʊ"), ("OY", "ɔɪ"), ("UH", "ʊ"), ("UW", "u"),
        // Stops and affricates
        ("P", "p"), ("B", "b"), ("T", "t"), ("D", "d"), ("K", "k"), ("G", "ɡ"),
        ("CH", "tʃ"), ("JH", "dʒ"),
        // Fricatives
        ("F", "f"), ("V", "v"), ("TH", "θ"), ("DH", "ð"), ("S", "s"),
        ("Z", "z"), ("SH", "ʃ"), ("ZH", "ʒ"), ("HH", "h"),
        // Sonorants
        ("M", "m"), ("N", "n"), ("NG", "ŋ"), ("L", "l"), ("R", "ɹ"),
        ("W", "w"), ("Y", "j"),
    ]
    .into_iter()
    .collect();

    /// Spelling rules for out-of-vocabulary words, two-letter rules first.
    static ref DIGRAPHS: HashMap<&'static str, &'static [&'static str]> = [
        ("th", &["TH"][..]), ("sh", &["SH"]), ("ch", &["CH"]), ("ng", &["NG"]),
        ("ph", &["F"]), ("wh", &["W"]), ("ck", &["K"]), ("ee", &["IY1"]),
        ("ea", &["IY1"]), ("oo", &["UW1"]), ("ou", &["AW1"]), ("ow", &["OW1"]),
        ("ai", &["EY1"]), ("ay", &["EY1"]), ("oi", &["OY1"]), ("oy", &["OY1"]),
    ]
    .into_iter()
    .collect();
}

/// Pronunciation lexicon keyed by uppercase word.
#[derive(Debug, Default, Clone)]
pub struct EnglishBackend {
    dict: HashMap<String, Vec<Vec<String>>>,
}

impl EnglishBackend {
    /// A backend without a lexicon: nothing is "known", every word is
    /// transcribed by rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CMU dictionary text.
    ///
    /// Format: one entry per line, "WORD  PH1 PH2 ...". Variants are
    /// written "WORD(2)". Lines starting with ";;;" are comments.
    pub fn from_cmudict(data: &str) -> Self {
        let mut dict: HashMap<String, Vec<Vec<String>>> = HashMap::new();
        for (lineno, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let Some((word_raw, phones)) = line.split_once(char::is_whitespace) else {
                log::warn!("Skipping lexicon line {}: no pronunciation", lineno + 1);
                continue;
            };

            // WORD(2) -> WORD
            let word = word_raw
                .split('(')
                .next()
                .unwrap_or(word_raw)
                .to_uppercase();
            let phonemes: Vec<String> = phones.split_whitespace().map(str::to_string).collect();
            if !phonemes.is_empty() {
                dict.entry(word).or_default().push(phonemes);
            }
        }
        Self { dict }
    }

    /// Load a CMU dictionary file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon: {}", path.display()))?;
        let backend = Self::from_cmudict(&data);
        log::info!("Loaded {} lexicon entries from {}", backend.len(), path.display());
        Ok(backend)
    }

    /// Load the lexicon named by `VIG2P_LEXICON`, or start empty.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(LEXICON_ENV) else {
            return Self::new();
        };
        match Self::from_file(Path::new(&path)) {
            Ok(backend) => backend,
            Err(e) => {
                log::warn!("{:#}; continuing without a lexicon", e);
                Self::new()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.dict.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dict.is_empty()
    }

    /// First pronunciation variant of a word, case-insensitive.
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.dict
            .get(&word.to_uppercase())
            .and_then(|variants| variants.first())
            .map(Vec::as_slice)
    }

    /// ARPABET phonemes from the lexicon, or by rule if the word is unknown.
    pub fn word_to_phonemes(&self, word: &str) -> Vec<String> {
        match self.lookup(word) {
            Some(phonemes) => phonemes.to_vec(),
            None => rule_based_phonemes(word),
        }
    }
}

impl ForeignBackend for EnglishBackend {
    fn contains(&self, word: &str) -> bool {
        self.dict.contains_key(&word.to_uppercase())
    }

    fn transcribe(&self, word: &str, phone_separator: &str, word_separator: &str) -> Result<String> {
        let words: Vec<String> = word
            .split_whitespace()
            .map(|w| {
                self.word_to_phonemes(w)
                    .iter()
                    .filter_map(|p| arpabet_to_ipa(p))
                    .collect::<Vec<_>>()
                    .join(phone_separator)
            })
            .collect();
        Ok(words.join(word_separator))
    }
}

/// Best-effort ARPABET for a word missing from the lexicon.
fn rule_based_phonemes(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let mut phonemes: Vec<String> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if let Some(mapped) = DIGRAPHS.get(pair.as_str()) {
                phonemes.extend(mapped.iter().map(|p| p.to_string()));
                i += 2;
                continue;
            }
        }

        let next = chars.get(i + 1).copied();
        let is_last = i + 1 == chars.len();
        let mapped: &[&str] = match chars[i] {
            'a' => &["AE1"],
            'c' if matches!(next, Some('e' | 'i' | 'y')) => &["S"],
            'c' | 'k' | 'q' => &["K"],
            // silent final e
            'e' if is_last && !phonemes.is_empty() => &[],
            'e' => &["EH1"],
            'i' => &["IH1"],
            'j' => &["JH"],
            'o' => &["AA1"],
            'u' => &["AH1"],
            'x' => &["K", "S"],
            'y' if phonemes.is_empty() => &["Y"],
            'y' => &["IY1"],
            'h' => &["HH"],
            c @ ('b' | 'd' | 'f' | 'g' | 'l' | 'm' | 'n' | 'p' | 'r' | 's' | 't' | 'v'
            | 'w' | 'z') => {
                phonemes.push(c.to_ascii_uppercase().to_string());
                &[]
            }
            _ => &[],
        };
        phonemes.extend(mapped.iter().map(|p| p.to_string()));
        i += 1;
    }

    if phonemes.is_empty() {
        phonemes.push("AH0".to_string());
    }
    phonemes
}

/// Strip stress markers from an ARPABET phoneme.
pub fn strip_stress(phoneme: &str) -> &str {
    phoneme.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// IPA for one ARPABET phoneme. Stressed vowels carry a leading `ˈ` or
/// `ˌ`; unstressed AH and ER reduce to ə and ɚ.
pub fn arpabet_to_ipa(phoneme: &str) -> Option<String> {
    let base = strip_stress(phoneme);
    let stress = &phoneme[base.len()..];
    match (base, stress) {
        ("AH", "0") => return Some("ə".to_string()),
        ("ER", "0") => return Some("ɚ".to_string()),
        _ => {}
    }
    let ipa = ARPABET_TO_IPA.get(base)?;
    let mark = match stress {
        "1" => "ˈ",
        "2" => "ˌ",
        _ => "",
    };
    Some(format!("{}{}", mark, ipa))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = ";;; sample entries
READING  R IY1 D IH0 NG
READING(2)  R EH1 D IH0 NG
CAT  K AE1 T
FBI  EH1 F B IY1 AY1
F  EH1 F
B  B IY1
I  AY1
BROKEN
";

    fn backend() -> EnglishBackend {
        EnglishBackend::from_cmudict(SAMPLE)
    }

    #[test]
    fn test_parse_skips_comments_and_malformed_lines() {
        let b = backend();
        assert_eq!(b.len(), 6);
        assert!(!b.contains("broken"));
    }

    #[test]
    fn test_lookup_first_variant() {
        let b = backend();
        assert_eq!(b.lookup("reading").unwrap(), ["R", "IY1", "D", "IH0", "NG"]);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let b = backend();
        assert_eq!(b.lookup("Cat"), b.lookup("CAT"));
        assert!(b.contains("cat"));
        assert!(!b.contains("dog"));
    }

    #[test]
    fn test_transcribe_known_word() {
        let b = backend();
        assert_eq!(b.transcribe("reading", "", "").unwrap(), "ɹˈidɪŋ");
        assert_eq!(b.transcribe("cat", "/", "/ /").unwrap(), "k/ˈæ/t");
    }

    #[test]
    fn test_transcribe_multiple_words() {
        let b = backend();
        assert_eq!(b.transcribe("cat cat", "/", "/ /").unwrap(), "k/ˈæ/t/ /k/ˈæ/t");
    }

    #[test]
    fn test_transcribe_unknown_word_by_rule() {
        let b = EnglishBackend::new();
        assert!(b.is_empty());
        assert_eq!(b.transcribe("ship", "", "").unwrap(), "ʃˈɪp");
        assert_eq!(b.transcribe("cake", " ", "").unwrap(), "k ˈæ k");
    }

    #[test]
    fn test_letter_by_letter_from_lexicon() {
        let b = backend();
        assert!(b.is_letter_by_letter("FBI").unwrap());
        assert!(!b.is_letter_by_letter("reading").unwrap());
        assert!(!b.is_letter_by_letter("xyz").unwrap());
    }

    #[test]
    fn test_rule_based_never_empty() {
        assert_eq!(rule_based_phonemes("ñ"), vec!["AH0"]);
        assert_eq!(rule_based_phonemes("box"), vec!["B", "AA1", "K", "S"]);
        assert_eq!(rule_based_phonemes("city"), vec!["S", "IH1", "T", "IY1"]);
        assert_eq!(rule_based_phonemes("yes")[0], "Y");
    }

    #[test]
    fn test_arpabet_to_ipa() {
        assert_eq!(arpabet_to_ipa("AH0").unwrap(), "ə");
        assert_eq!(arpabet_to_ipa("AH1").unwrap(), "ˈʌ");
        assert_eq!(arpabet_to_ipa("ER0").unwrap(), "ɚ");
        assert_eq!(arpabet_to_ipa("OW2").unwrap(), "ˌoʊ");
        assert_eq!(arpabet_to_ipa("NG").unwrap(), "ŋ");
        assert_eq!(arpabet_to_ipa("XX"), None);
    }

    #[test]
    fn test_strip_stress() {
        assert_eq!(strip_stress("AE1"), "AE");
        assert_eq!(strip_stress("K"), "K");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let b = EnglishBackend::from_file(file.path()).unwrap();
        assert!(b.contains("reading"));
    }

    #[test]
    fn test_from_missing_file() {
        assert!(EnglishBackend::from_file(Path::new("/nonexistent/cmudict.txt")).is_err());
    }
}
