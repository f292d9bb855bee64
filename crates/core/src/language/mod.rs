pub mod dispatch;
pub mod g2p;
pub mod phonemes;
pub mod rules;
pub mod segment;
pub mod spell;
pub mod syllable;
