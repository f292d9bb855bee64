//! Orthography-to-IPA tables for Vietnamese syllables.
//!
//! Vowel keys are tone-free: the decomposer strips tone diacritics before
//! looking a cluster up, and reads the tone from the marked syllable.
//! That way "hòa" and "hoà" resolve to the same entry.

use std::collections::HashMap;

/// Glottal stop inserted before onsetless syllables when enabled.
pub const GLOTTAL_STOP: &str = "ʔ";
/// Labio-velar glide appended to the onset by on-glides.
pub const LABIAL_GLIDE: &str = "w";
/// Onset of "gi" when it is followed by a coda ("gìn", "gịt").
pub const GI_ONSET: &str = "z";
/// The labialized velar onset spelled "qu".
pub const LABIALIZED_VELAR: &str = "kw";
/// Tone of a syllable without a tone diacritic in the numbered systems.
pub const LEVEL_TONE: &str = "1";

/// Tone id per diacritic, in sắc, huyền, hỏi, ngã, nặng order.
const TONE_IDS: [&str; 5] = ["5", "2", "4", "3", "6"];

/// Each vowel letter with its sắc, huyền, hỏi, ngã and nặng forms.
const TONED_VOWELS: &[(char, [char; 5])] = &[
    ('a', ['á', 'à', 'ả', 'ã', 'ạ']),
    ('ă', ['ắ', 'ằ', 'ẳ', 'ẵ', 'ặ']),
    ('â', ['ấ', 'ầ', 'ẩ', 'ẫ', 'ậ']),
    ('e', ['é', 'è', 'ẻ', 'ẽ', 'ẹ']),
    ('ê', ['ế', 'ề', 'ể', 'ễ', 'ệ']),
    ('i', ['í', 'ì', 'ỉ', 'ĩ', 'ị']),
    ('o', ['ó', 'ò', 'ỏ', 'õ', 'ọ']),
    ('ô', ['ố', 'ồ', 'ổ', 'ỗ', 'ộ']),
    ('ơ', ['ớ', 'ờ', 'ở', 'ỡ', 'ợ']),
    ('u', ['ú', 'ù', 'ủ', 'ũ', 'ụ']),
    ('ư', ['ứ', 'ừ', 'ử', 'ữ', 'ự']),
    ('y', ['ý', 'ỳ', 'ỷ', 'ỹ', 'ỵ']),
];

const ONSETS: &[(&str, &str)] = &[
    ("b", "b"),
    ("c", "k"),
    ("ch", "c"),
    ("d", "z"),
    ("đ", "d"),
    ("g", "ɣ"),
    ("gh", "ɣ"),
    ("gi", "z"),
    ("h", "h"),
    ("k", "k"),
    ("kh", "x"),
    ("l", "l"),
    ("m", "m"),
    ("n", "n"),
    ("ng", "ŋ"),
    ("ngh", "ŋ"),
    ("nh", "ɲ"),
    ("p", "p"),
    ("ph", "f"),
    ("qu", "kw"),
    ("r", "ʐ"),
    ("s", "ʂ"),
    ("t", "t"),
    ("th", "tʰ"),
    ("tr", "ʈ"),
    ("v", "v"),
    ("x", "s"),
];

const CODAS: &[(&str, &str)] = &[
    ("c", "k"),
    ("ch", "k"),
    ("m", "m"),
    ("n", "n"),
    ("ng", "ŋ"),
    ("nh", "ɲ"),
    ("p", "p"),
    ("t", "t"),
];

const NUCLEUS: &[(&str, &str)] = &[
    ("a", "a"),
    ("ă", "ă"),
    ("â", "ɤ̆"),
    ("e", "ɛ"),
    ("ê", "e"),
    ("i", "i"),
    ("o", "ɔ"),
    ("ô", "o"),
    ("ơ", "ɤ"),
    ("u", "u"),
    ("ư", "ɯ"),
    ("y", "i"),
    ("ia", "iə"),
    ("iê", "iə"),
    ("yê", "iə"),
    ("oo", "ɔ"),
    ("ôô", "o"),
    ("ua", "uə"),
    ("uô", "uə"),
    ("ưa", "ɯə"),
    ("ươ", "ɯə"),
];

const ON_GLIDES: &[(&str, &str)] = &[
    ("oa", "a"),
    ("oă", "ă"),
    ("oe", "ɛ"),
    ("uă", "ă"),
    ("uâ", "ɤ̆"),
    ("ue", "ɛ"),
    ("uê", "e"),
    ("uơ", "ɤ"),
    ("uy", "i"),
    ("uya", "iə"),
    ("uyê", "iə"),
];

/// Nucleus followed by an off-glide; the last symbol is the coda.
const OFF_GLIDES: &[(&str, &str)] = &[
    ("ai", "aj"),
    ("ao", "aw"),
    ("au", "ăw"),
    ("âu", "ɤ̆w"),
    ("ay", "ăj"),
    ("ây", "ɤ̆j"),
    ("eo", "ɛw"),
    ("êu", "ew"),
    ("iu", "iw"),
    ("oi", "ɔj"),
    ("ôi", "oj"),
    ("ơi", "ɤj"),
    ("ui", "uj"),
    ("ưi", "ɯj"),
    ("ưu", "ɯw"),
    ("iêu", "iəw"),
    ("yêu", "iəw"),
    ("uôi", "uəj"),
    ("ươi", "ɯəj"),
    ("ươu", "ɯəw"),
];

/// On-glide, nucleus and off-glide; the last symbol is the coda.
const ONOFF_GLIDES: &[(&str, &str)] = &[
    ("oai", "aj"),
    ("oay", "ăj"),
    ("oao", "aw"),
    ("oeo", "ɛw"),
    ("uây", "ɤ̆j"),
    ("uyu", "iw"),
];

/// Whole syllables spelled with "qu" that the onset table cannot split.
const QU: &[(&str, &str)] = &[("quy", "kwi")];

/// Whole syllables spelled with "gi" that the onset table cannot split.
const GI: &[(&str, &str)] = &[("gi", "zi")];

/// Spoken names of lowercase letters, used for spelling and for lone
/// letters inside a segmented word.
const LETTER_LOWERCASE: &[(char, &str)] = &[
    ('a', "a"),
    ('ă', "á"),
    ('â', "ớ"),
    ('b', "bờ"),
    ('c', "cờ"),
    ('d', "dờ"),
    ('đ', "đờ"),
    ('e', "e"),
    ('ê', "ê"),
    ('f', "phờ"),
    ('g', "gờ"),
    ('h', "hờ"),
    ('i', "i"),
    ('j', "gi"),
    ('k', "ka"),
    ('l', "lờ"),
    ('m', "mờ"),
    ('n', "nờ"),
    ('o', "o"),
    ('ô', "ô"),
    ('ơ', "ơ"),
    ('p', "pờ"),
    ('q', "quy"),
    ('r', "rờ"),
    ('s', "sờ"),
    ('t', "tờ"),
    ('u', "u"),
    ('ư', "ư"),
    ('v', "vờ"),
    ('w', "gờ"),
    ('x', "xờ"),
    ('y', "i"),
    ('z', "gia"),
];

/// Alphabet names used when reading abbreviations aloud.
const LETTER_UPPERCASE: &[(char, &str)] = &[
    ('A', "a"),
    ('B', "bê"),
    ('C', "xê"),
    ('D', "đê"),
    ('E', "e"),
    ('F', "ép"),
    ('G', "gờ"),
    ('H', "hát"),
    ('I', "i"),
    ('J', "gi"),
    ('K', "ka"),
    ('L', "eo"),
    ('M', "em"),
    ('N', "en"),
    ('O', "ô"),
    ('P', "pê"),
    ('Q', "quy"),
    ('R', "rờ"),
    ('S', "ét"),
    ('T', "tê"),
    ('U', "u"),
    ('V', "vê"),
    ('W', "vê kép"),
    ('X', "ích"),
    ('Y', "i"),
    ('Z', "giét"),
];

/// Read-only lookup tables for the syllable decomposer and the speller.
#[derive(Debug)]
pub struct PhonemeTables {
    pub onsets: HashMap<&'static str, &'static str>,
    pub codas: HashMap<&'static str, &'static str>,
    pub nucleus: HashMap<&'static str, &'static str>,
    pub on_glides: HashMap<&'static str, &'static str>,
    pub off_glides: HashMap<&'static str, &'static str>,
    pub onoff_glides: HashMap<&'static str, &'static str>,
    pub qu: HashMap<&'static str, &'static str>,
    pub gi: HashMap<&'static str, &'static str>,
    /// Toned vowel letter -> tone id
    pub tones: HashMap<char, &'static str>,
    /// Toned vowel letter -> the same letter without its tone mark
    pub untoned: HashMap<char, char>,
    pub letters_lower: HashMap<char, &'static str>,
    pub letters_upper: HashMap<char, &'static str>,
}

lazy_static::lazy_static! {
    static ref VIETNAMESE: PhonemeTables = PhonemeTables::build();
}

impl PhonemeTables {
    /// The process-wide Vietnamese tables, built on first use.
    pub fn vietnamese() -> &'static PhonemeTables {
        &VIETNAMESE
    }

    fn build() -> Self {
        let mut tones = HashMap::new();
        let mut untoned = HashMap::new();
        for (base, forms) in TONED_VOWELS {
            for (form, id) in forms.iter().zip(TONE_IDS) {
                tones.insert(*form, id);
                untoned.insert(*form, *base);
            }
        }

        Self {
            onsets: ONSETS.iter().copied().collect(),
            codas: CODAS.iter().copied().collect(),
            nucleus: NUCLEUS.iter().copied().collect(),
            on_glides: ON_GLIDES.iter().copied().collect(),
            off_glides: OFF_GLIDES.iter().copied().collect(),
            onoff_glides: ONOFF_GLIDES.iter().copied().collect(),
            qu: QU.iter().copied().collect(),
            gi: GI.iter().copied().collect(),
            tones,
            untoned,
            letters_lower: LETTER_LOWERCASE.iter().copied().collect(),
            letters_upper: LETTER_UPPERCASE.iter().copied().collect(),
        }
    }

    /// Remove tone diacritics, keeping vowel-quality marks (ă, â, ơ, ...).
    pub fn strip_tones(&self, word: &str) -> String {
        word.chars()
            .map(|c| self.untoned.get(&c).copied().unwrap_or(c))
            .collect()
    }

    /// Tone id of the rightmost tone-bearing character, if any.
    pub fn last_tone(&self, word: &str) -> Option<&'static str> {
        word.chars().filter_map(|c| self.tones.get(&c).copied()).last()
    }

    /// Spoken name of a letter: the alphabet-reading table for uppercase
    /// letters, the lowercase table otherwise.
    pub fn letter_name(&self, letter: char) -> Option<&'static str> {
        if letter.is_uppercase() {
            self.letters_upper.get(&letter).copied()
        } else {
            self.letters_lower.get(&letter).copied()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_loaded() {
        let t = PhonemeTables::vietnamese();
        assert_eq!(t.onsets.get("ngh"), Some(&"ŋ"));
        assert_eq!(t.codas.get("ch"), Some(&"k"));
        assert_eq!(t.nucleus.get("ươ"), Some(&"ɯə"));
        assert_eq!(t.on_glides.get("oa"), Some(&"a"));
        assert_eq!(t.off_glides.get("ai"), Some(&"aj"));
        assert_eq!(t.onoff_glides.get("oai"), Some(&"aj"));
        assert_eq!(t.qu.get("quy"), Some(&"kwi"));
        assert_eq!(t.gi.get("gi"), Some(&"zi"));
    }

    #[test]
    fn test_tone_ids() {
        let t = PhonemeTables::vietnamese();
        assert_eq!(t.tones.get(&'á'), Some(&"5"));
        assert_eq!(t.tones.get(&'ờ'), Some(&"2"));
        assert_eq!(t.tones.get(&'ả'), Some(&"4"));
        assert_eq!(t.tones.get(&'ữ'), Some(&"3"));
        assert_eq!(t.tones.get(&'ỵ'), Some(&"6"));
        assert_eq!(t.tones.get(&'a'), None);
        assert_eq!(t.tones.len(), 60);
    }

    #[test]
    fn test_strip_tones_keeps_vowel_quality() {
        let t = PhonemeTables::vietnamese();
        assert_eq!(t.strip_tones("nguyễn"), "nguyên");
        assert_eq!(t.strip_tones("đặng"), "đăng");
        assert_eq!(t.strip_tones("hòa"), "hoa");
        assert_eq!(t.strip_tones("hoà"), "hoa");
    }

    #[test]
    fn test_last_tone_rightmost_wins() {
        let t = PhonemeTables::vietnamese();
        assert_eq!(t.last_tone("hoa"), None);
        assert_eq!(t.last_tone("việt"), Some("6"));
        assert_eq!(t.last_tone("áà"), Some("2"));
    }

    #[test]
    fn test_glide_values_end_in_glide() {
        let t = PhonemeTables::vietnamese();
        for value in t.off_glides.values().chain(t.onoff_glides.values()) {
            let last = value.chars().last().unwrap();
            assert!(last == 'j' || last == 'w', "{} should end in a glide", value);
        }
    }

    #[test]
    fn test_letter_names() {
        let t = PhonemeTables::vietnamese();
        assert_eq!(t.letter_name('b'), Some("bờ"));
        assert_eq!(t.letter_name('W'), Some("vê kép"));
        assert_eq!(t.letter_name('ç'), None);
        assert_eq!(t.letters_upper.len(), 26);
    }
}
