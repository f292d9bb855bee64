//! Dialect-conditioned phonological rules.
//!
//! Each rule takes a partial decomposition and returns the rewritten one.
//! The decomposer applies them in a fixed order: velar fronting,
//! monophthongization, tone assignment, closed-syllable adjustments.

use crate::types::{Decomposition, Dialect, G2pConfig};

use super::phonemes::LEVEL_TONE;

const FRONT_VOWELS: [&str; 3] = ["i", "e", "ɛ"];
const STOPS: [&str; 3] = ["p", "t", "k"];

/// Nuclei that pull an alveolar coda back to velar outside the north.
const BACKING_NUCLEI: [&str; 10] = ["iə", "ɯə", "uə", "u", "ɯ", "ɤ", "o", "ɔ", "ă", "ɤ̆"];

/// Where the spelled coda sits inside the syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllableShape {
    /// Length of the syllable in characters
    pub len: usize,
    /// Index where the spelled coda starts; `len` when no coda was spelled
    pub coda_idx: usize,
}

impl SyllableShape {
    pub fn has_spelled_coda(&self) -> bool {
        self.coda_idx != self.len
    }

    pub fn has_two_letter_coda(&self) -> bool {
        self.len >= 2 && self.coda_idx == self.len - 2
    }
}

/// Velar fronting and its reverse, by dialect.
pub fn front_velars(
    mut d: Decomposition,
    shape: &SyllableShape,
    config: &G2pConfig,
) -> Decomposition {
    if config.dialect == Dialect::North {
        // "ach", "anh" -> ɛ
        if d.nucleus == "a"
            && ((d.coda == "k" && shape.has_two_letter_coda()) || d.coda == "ɲ")
        {
            d.nucleus = "ɛ".into();
        }
        if config.palatals && d.coda == "k" && FRONT_VOWELS.contains(&d.nucleus.as_str()) {
            d.coda = "c".into();
        }
    } else if d.nucleus == "i" || d.nucleus == "e" {
        match d.coda.as_str() {
            "k" => d.coda = "t".into(),
            "ŋ" => d.coda = "n".into(),
            _ => {}
        }
    } else if BACKING_NUCLEI.contains(&d.nucleus.as_str()) {
        match d.coda.as_str() {
            "t" => d.coda = "k".into(),
            "n" => d.coda = "ŋ".into(),
            _ => {}
        }
    }
    d
}

/// Southern centering diphthongs collapse before labial codas.
pub fn monophthongize(mut d: Decomposition, config: &G2pConfig) -> Decomposition {
    if config.dialect != Dialect::South || !(d.coda == "m" || d.coda == "p") {
        return d;
    }
    let collapsed = match d.nucleus.as_str() {
        "iə" => "i",
        "uə" => "u",
        "ɯə" => "ɯ",
        _ => return d,
    };
    d.nucleus = collapsed.into();
    d
}

/// Set the tone from the rightmost diacritic, or the level tone.
pub fn assign_tone(mut d: Decomposition, marked: Option<&str>) -> Decomposition {
    d.tone = marked.unwrap_or(LEVEL_TONE).to_string();
    d
}

/// Adjustments for syllables whose coda was not spelled out.
///
/// Gated on `coda_idx == len`: only codas produced by an off-glide reach
/// these rules, never a spelled `p`/`t`/`c`/`ng`.
pub fn closed_syllable_adjustments(
    d: Decomposition,
    shape: &SyllableShape,
    config: &G2pConfig,
) -> Decomposition {
    if shape.has_spelled_coda() {
        return d;
    }
    let d = normalize_nang_tone(d, config);
    let d = raise_sac_tone(d, config);
    let d = split_cao_tones(d, config);
    labialize_coda(d)
}

/// Obstruent-final nặng is modal voice in the north and south.
pub fn normalize_nang_tone(mut d: Decomposition, config: &G2pConfig) -> Decomposition {
    if matches!(config.dialect, Dialect::North | Dialect::South)
        && d.tone == "21g"
        && STOPS.contains(&d.coda.as_str())
    {
        d.tone = "21".into();
    }
    d
}

/// Sắc before a stop in the north and centre.
pub fn raise_sac_tone(mut d: Decomposition, config: &G2pConfig) -> Decomposition {
    let sac = match config.dialect {
        Dialect::North => d.tone == "24",
        Dialect::Central => d.tone == "13",
        Dialect::South => false,
    };
    if sac && STOPS.contains(&d.coda.as_str()) {
        d.tone = "45".into();
    }
    d
}

/// The 8-tone system gives checked sắc and nặng their own numbers.
pub fn split_cao_tones(mut d: Decomposition, config: &G2pConfig) -> Decomposition {
    if config.is_cao() && STOPS.contains(&d.coda.as_str()) {
        match d.tone.as_str() {
            "5" => d.tone = "5b".into(),
            "6" => d.tone = "6b".into(),
            _ => {}
        }
    }
    d
}

/// Velar codas after back rounded vowels are doubly articulated.
pub fn labialize_coda(mut d: Decomposition) -> Decomposition {
    if matches!(d.nucleus.as_str(), "u" | "o" | "ɔ") {
        match d.coda.as_str() {
            "ŋ" => d.coda = "ŋ͡m".into(),
            "k" => d.coda = "k͡p".into(),
            _ => {}
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ToneSystem;

    fn parts(onset: &str, nucleus: &str, coda: &str, tone: &str) -> Decomposition {
        Decomposition {
            onset: onset.into(),
            nucleus: nucleus.into(),
            coda: coda.into(),
            tone: tone.into(),
        }
    }

    fn config(dialect: Dialect) -> G2pConfig {
        G2pConfig::new(dialect, ToneSystem::Cao, "")
    }

    const OPEN: SyllableShape = SyllableShape { len: 3, coda_idx: 3 };
    const ONE_LETTER_CODA: SyllableShape = SyllableShape { len: 3, coda_idx: 2 };
    const TWO_LETTER_CODA: SyllableShape = SyllableShape { len: 4, coda_idx: 2 };

    #[test]
    fn test_shape() {
        assert!(!OPEN.has_spelled_coda());
        assert!(ONE_LETTER_CODA.has_spelled_coda());
        assert!(!ONE_LETTER_CODA.has_two_letter_coda());
        assert!(TWO_LETTER_CODA.has_two_letter_coda());
    }

    #[test]
    fn test_north_fronting() {
        let north = config(Dialect::North);
        let cases = [
            // (nucleus, coda, shape, expected nucleus, expected coda)
            ("a", "k", TWO_LETTER_CODA, "ɛ", "k"), // ach
            ("a", "k", ONE_LETTER_CODA, "a", "k"), // ac
            ("a", "ɲ", TWO_LETTER_CODA, "ɛ", "ɲ"), // anh
            ("a", "ŋ", TWO_LETTER_CODA, "a", "ŋ"), // ang
            ("i", "k", TWO_LETTER_CODA, "i", "k"), // ich, no palatals
            ("o", "ɲ", TWO_LETTER_CODA, "o", "ɲ"),
        ];
        for (nuc, cod, shape, want_nuc, want_cod) in cases {
            let out = front_velars(parts("", nuc, cod, ""), &shape, &north);
            assert_eq!((out.nucleus.as_str(), out.coda.as_str()), (want_nuc, want_cod));
        }
    }

    #[test]
    fn test_north_palatals() {
        let mut north = config(Dialect::North);
        north.palatals = true;
        for nuc in ["i", "e", "ɛ"] {
            let out = front_velars(parts("", nuc, "k", ""), &TWO_LETTER_CODA, &north);
            assert_eq!(out.coda, "c");
        }
        let out = front_velars(parts("", "u", "k", ""), &ONE_LETTER_CODA, &north);
        assert_eq!(out.coda, "k");
        // "ach" is fronted to ɛ first, then palatalized
        let out = front_velars(parts("", "a", "k", ""), &TWO_LETTER_CODA, &north);
        assert_eq!((out.nucleus.as_str(), out.coda.as_str()), ("ɛ", "c"));
    }

    #[test]
    fn test_south_and_central_fronting() {
        for dialect in [Dialect::Central, Dialect::South] {
            let c = config(dialect);
            let cases = [
                ("i", "k", "t"),
                ("e", "ŋ", "n"),
                ("ɛ", "k", "k"),
                ("uə", "t", "k"),
                ("ɤ̆", "n", "ŋ"),
                ("ă", "t", "k"),
                ("a", "t", "t"),
                ("i", "t", "t"),
            ];
            for (nuc, cod, want) in cases {
                let out = front_velars(parts("", nuc, cod, ""), &ONE_LETTER_CODA, &c);
                assert_eq!(out.coda, want, "{:?} {} + {}", dialect, nuc, cod);
                assert_eq!(out.nucleus, nuc);
            }
        }
    }

    #[test]
    fn test_monophthongize_south_only() {
        let south = config(Dialect::South);
        let cases = [
            ("iə", "m", "i"),
            ("uə", "p", "u"),
            ("ɯə", "m", "ɯ"),
            ("iə", "n", "iə"),
            ("a", "m", "a"),
        ];
        for (nuc, cod, want) in cases {
            assert_eq!(monophthongize(parts("", nuc, cod, ""), &south).nucleus, want);
        }
        let north = config(Dialect::North);
        assert_eq!(monophthongize(parts("", "iə", "m", ""), &north).nucleus, "iə");
    }

    #[test]
    fn test_assign_tone() {
        assert_eq!(assign_tone(parts("h", "a", "", ""), None).tone, "1");
        assert_eq!(assign_tone(parts("h", "a", "", ""), Some("6")).tone, "6");
    }

    #[test]
    fn test_nang_and_sac_rules() {
        let north = config(Dialect::North);
        let central = config(Dialect::Central);
        let south = config(Dialect::South);

        assert_eq!(normalize_nang_tone(parts("", "a", "t", "21g"), &north).tone, "21");
        assert_eq!(normalize_nang_tone(parts("", "a", "t", "21g"), &central).tone, "21g");
        assert_eq!(normalize_nang_tone(parts("", "a", "m", "21g"), &south).tone, "21g");

        assert_eq!(raise_sac_tone(parts("", "a", "p", "24"), &north).tone, "45");
        assert_eq!(raise_sac_tone(parts("", "a", "p", "13"), &central).tone, "45");
        assert_eq!(raise_sac_tone(parts("", "a", "p", "24"), &south).tone, "24");
        assert_eq!(raise_sac_tone(parts("", "a", "n", "24"), &north).tone, "24");
    }

    #[test]
    fn test_split_cao_tones() {
        let cao = config(Dialect::North);
        let pham = G2pConfig::new(Dialect::North, ToneSystem::Pham, "");
        assert_eq!(split_cao_tones(parts("", "a", "k", "5"), &cao).tone, "5b");
        assert_eq!(split_cao_tones(parts("", "a", "t", "6"), &cao).tone, "6b");
        assert_eq!(split_cao_tones(parts("", "a", "m", "5"), &cao).tone, "5");
        assert_eq!(split_cao_tones(parts("", "a", "k", "5"), &pham).tone, "5");
    }

    #[test]
    fn test_labialize_coda() {
        assert_eq!(labialize_coda(parts("", "o", "ŋ", "1")).coda, "ŋ͡m");
        assert_eq!(labialize_coda(parts("", "ɔ", "k", "1")).coda, "k͡p");
        assert_eq!(labialize_coda(parts("", "u", "k", "1")).coda, "k͡p");
        assert_eq!(labialize_coda(parts("", "a", "k", "1")).coda, "k");
    }

    #[test]
    fn test_closed_syllable_adjustments_skip_spelled_codas() {
        let cao = config(Dialect::North);
        let d = parts("h", "ɔ", "k", "6");
        let out = closed_syllable_adjustments(d.clone(), &ONE_LETTER_CODA, &cao);
        assert_eq!(out, d);

        let out = closed_syllable_adjustments(d, &OPEN, &cao);
        assert_eq!(out.coda, "k͡p");
        assert_eq!(out.tone, "6b");
    }
}
