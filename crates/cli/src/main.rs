//! vig2p CLI: Vietnamese text to phonemes.

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use vig2p_core::{EnglishBackend, ForeignBackend, G2pConfig, G2pSettings, Transcriber};

// ─── CLI ─────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "vig2p",
    about = "Transcribe Vietnamese text into phonemes",
    version,
)]
struct Cli {
    /// Text to transcribe (default: read stdin line by line)
    text: Option<String>,

    /// JSON settings file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Regional pronunciation
    #[arg(long, value_parser = ["north", "central", "south"])]
    dialect: Option<String>,

    /// Insert a glottal stop before vowel-initial syllables
    #[arg(long, default_value_t = false)]
    glottal: bool,

    /// Palatalize fronted velar codas
    #[arg(long, default_value_t = false)]
    palatals: bool,

    /// Tone numbering
    #[arg(long, value_parser = ["pham", "cao"])]
    tone_system: Option<String>,

    /// Separator between phonemes of one syllable
    #[arg(long)]
    separator: Option<String>,

    /// Input is already normalized
    #[arg(long, default_value_t = false)]
    normalized: bool,

    /// CMU pronouncing dictionary for foreign words (default: $VIG2P_LEXICON)
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    log::debug!("Config: {:?}", config);

    let backend: Arc<dyn ForeignBackend> = match &cli.lexicon {
        Some(path) => Arc::new(EnglishBackend::from_file(path)?),
        None => Arc::new(EnglishBackend::from_env()),
    };
    let transcriber = Transcriber::new(config, backend);

    match &cli.text {
        Some(text) => println!("{}", transcriber.transcribe(text)?),
        None => {
            let stdin = std::io::stdin();
            for (lineno, line) in stdin.lock().lines().enumerate() {
                let line = line.context("Failed to read stdin")?;
                let phonemes = transcriber
                    .transcribe(&line)
                    .with_context(|| format!("Line {}", lineno + 1))?;
                println!("{}", phonemes);
            }
        }
    }
    Ok(())
}

// ─── Helpers ─────────────────────────────────────────────────────

/// Settings file (or defaults) with command-line overrides applied.
fn build_config(cli: &Cli) -> Result<G2pConfig> {
    let mut settings = match &cli.config {
        Some(path) => G2pSettings::from_json_file(path)?,
        None => G2pSettings::default(),
    };

    if let Some(dialect) = &cli.dialect {
        settings.dialect = dialect.parse()?;
    }
    if let Some(system) = &cli.tone_system {
        settings.pham = system == "pham";
        settings.cao = system == "cao";
    }
    if let Some(separator) = &cli.separator {
        settings.separator = separator.clone();
    }
    settings.glottal |= cli.glottal;
    settings.palatals |= cli.palatals;
    settings.normalized |= cli.normalized;

    Ok(G2pConfig::try_from(settings)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vig2p_core::{Dialect, ToneSystem};

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["vig2p", "hoa"]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config, G2pConfig::default());
        assert_eq!(cli.text.as_deref(), Some("hoa"));
    }

    #[test]
    fn test_flags_override() {
        let cli = Cli::parse_from([
            "vig2p",
            "--dialect",
            "south",
            "--tone-system",
            "pham",
            "--separator",
            "/",
            "--glottal",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.dialect, Dialect::South);
        assert_eq!(config.tone_system, ToneSystem::Pham);
        assert_eq!(config.separator(), "/");
        assert!(config.glottal);
        assert!(cli.text.is_none());
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vig2p.json");
        std::fs::write(&path, r#"{"dialect": "central", "palatals": true}"#).unwrap();

        let cli = Cli::parse_from([
            "vig2p",
            "--config",
            path.to_str().unwrap(),
            "--tone-system",
            "cao",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.dialect, Dialect::Central);
        assert!(config.palatals);
        assert!(config.is_cao());
    }

    #[test]
    fn test_conflicting_tone_systems_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vig2p.json");
        std::fs::write(&path, r#"{"pham": true, "cao": true}"#).unwrap();

        let cli = Cli::parse_from(["vig2p", "--config", path.to_str().unwrap()]);
        assert!(build_config(&cli).is_err());
    }

    #[test]
    fn test_rejects_unknown_dialect() {
        assert!(Cli::try_parse_from(["vig2p", "--dialect", "east"]).is_err());
    }
}
