use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::G2pError;

/// Regional variety whose fronting and monophthongization rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    North,
    Central,
    South,
}

impl std::str::FromStr for Dialect {
    type Err = G2pError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Dialect::North),
            "central" | "c" => Ok(Dialect::Central),
            "south" | "s" => Ok(Dialect::South),
            other => Err(G2pError::InvalidConfiguration(format!(
                "unknown dialect '{}'",
                other
            ))),
        }
    }
}

/// Tone numbering: Pham's 6-tone system or Cao's 8-tone system.
///
/// Cao splits sắc and nặng into "b" variants before stop codas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneSystem {
    Pham,
    Cao,
}

/// Raw, unvalidated settings as they appear in a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct G2pSettings {
    pub dialect: Dialect,
    /// Insert a glottal stop before vowel-initial syllables
    pub glottal: bool,
    /// 6-tone numbering
    pub pham: bool,
    /// 8-tone numbering
    pub cao: bool,
    /// Fronted velar codas become palatal after front vowels
    pub palatals: bool,
    /// Separator between phonemes of one syllable
    pub separator: String,
    /// Input text has already been normalized
    pub normalized: bool,
}

impl Default for G2pSettings {
    fn default() -> Self {
        Self {
            dialect: Dialect::North,
            glottal: false,
            pham: false,
            cao: true,
            palatals: false,
            separator: String::new(),
            normalized: false,
        }
    }
}

impl G2pSettings {
    /// Load settings from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        let settings: G2pSettings = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;
        Ok(settings)
    }
}

/// Validated, immutable conversion configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct G2pConfig {
    pub dialect: Dialect,
    pub glottal: bool,
    pub palatals: bool,
    pub tone_system: ToneSystem,
    pub normalized: bool,
    separator: String,
    word_separator: String,
}

impl G2pConfig {
    pub fn new(dialect: Dialect, tone_system: ToneSystem, separator: &str) -> Self {
        Self {
            dialect,
            glottal: false,
            palatals: false,
            tone_system,
            normalized: false,
            separator: separator.to_string(),
            word_separator: word_separator_for(separator),
        }
    }

    /// Separator placed between the phonemes of one syllable.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Separator placed between syllables, and between words.
    ///
    /// Always the phoneme separator on both sides of a space, so a space can
    /// never appear inside one syllable's output.
    pub fn word_separator(&self) -> &str {
        &self.word_separator
    }

    pub fn is_cao(&self) -> bool {
        self.tone_system == ToneSystem::Cao
    }
}

impl Default for G2pConfig {
    fn default() -> Self {
        G2pConfig::new(Dialect::North, ToneSystem::Cao, "")
    }
}

impl TryFrom<G2pSettings> for G2pConfig {
    type Error = G2pError;

    fn try_from(settings: G2pSettings) -> Result<Self, Self::Error> {
        let tone_system = match (settings.pham, settings.cao) {
            (true, false) => ToneSystem::Pham,
            (false, true) => ToneSystem::Cao,
            (true, true) => {
                return Err(G2pError::InvalidConfiguration(
                    "Only one 'pham' system or 'cao' system can be enabled at a time.".into(),
                ))
            }
            (false, false) => {
                return Err(G2pError::InvalidConfiguration(
                    "At least one of 'pham' or 'cao' system must be enabled.".into(),
                ))
            }
        };

        Ok(Self {
            dialect: settings.dialect,
            glottal: settings.glottal,
            palatals: settings.palatals,
            tone_system,
            normalized: settings.normalized,
            word_separator: word_separator_for(&settings.separator),
            separator: settings.separator,
        })
    }
}

fn word_separator_for(separator: &str) -> String {
    format!("{} {}", separator, separator)
}

/// One syllable split into its phonetic parts.
///
/// Onset, nucleus and coda may be empty; the tone is filled in once the
/// decomposer has run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    pub onset: String,
    pub nucleus: String,
    pub coda: String,
    pub tone: String,
}

impl Decomposition {
    /// Non-empty parts in onset, nucleus, coda, tone order.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        [
            self.onset.as_str(),
            self.nucleus.as_str(),
            self.coda.as_str(),
            self.tone.as_str(),
        ]
        .into_iter()
        .filter(|p| !p.is_empty())
    }

    /// Join the non-empty parts with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.parts().collect::<Vec<_>>().join(separator)
    }
}
