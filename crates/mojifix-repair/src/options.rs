use crate::charset::Charset;
use crate::error::ConfigError;
use crate::table::CorruptionTable;

pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.9;

/// Decode order tried when detection is not confident enough: UTF-8, Latin-1,
/// ISO-8859-1. The last two labels resolve to the same codec.
pub const DEFAULT_FALLBACK_CHAIN: [Charset; 3] = [Charset::Utf8, Charset::Latin1, Charset::Latin1];

/// Tunables for a repair run.
///
/// Both thresholds are strict: a detection must be *above*
/// `confidence_threshold` to be trusted, a cached key must be *above*
/// `similarity_threshold` to be reused.
#[derive(Debug, Clone, PartialEq)]
pub struct RepairOptions {
    pub confidence_threshold: f64,
    pub similarity_threshold: f64,
    pub fallback_chain: Vec<Charset>,
    pub table: CorruptionTable,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            fallback_chain: DEFAULT_FALLBACK_CHAIN.to_vec(),
            table: CorruptionTable::portuguese(),
        }
    }
}

impl RepairOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit("confidence_threshold", self.confidence_threshold)?;
        check_unit("similarity_threshold", self.similarity_threshold)
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { name, value })
    }
}
