//! Mojibake repair: byte-preserving re-encode, statistical decode, fallback
//! chain, then the corruption table.

use crate::charset::{self, Charset};
use crate::detect::{CharsetDetector, HeuristicDetector};
use crate::options::RepairOptions;
use crate::table::CorruptionTable;

/// Bytes recovered from a string whose code points were once bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBytes {
    pub bytes: Vec<u8>,
    /// Code points above U+00FF that had no byte to map to.
    pub dropped: usize,
}

impl RawBytes {
    pub fn is_lossy(&self) -> bool {
        self.dropped > 0
    }
}

/// Map every code point below 256 to the byte of the same value and drop the
/// rest.
pub fn to_raw_bytes(text: &str) -> RawBytes {
    let mut dropped = 0;
    let bytes = text
        .chars()
        .filter_map(|c| match u8::try_from(u32::from(c)) {
            Ok(b) => Some(b),
            Err(_) => {
                dropped += 1;
                None
            }
        })
        .collect();
    RawBytes { bytes, dropped }
}

/// Which stage produced the decoded text (before the table pass).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    /// Re-encoding lost code points, or the detected codec rejected the bytes.
    Kept,
    Detected(Charset),
    Fallback(Charset),
    Forced,
}

/// Encoding repairer. Holds no per-run state.
#[derive(Debug, Clone)]
pub struct Repairer<D = HeuristicDetector> {
    detector: D,
    table: CorruptionTable,
    fallback: Vec<Charset>,
    confidence_threshold: f64,
}

impl Default for Repairer {
    fn default() -> Self {
        Self::new(RepairOptions::default())
    }
}

impl Repairer {
    pub fn new(options: RepairOptions) -> Self {
        Self::with_detector(options, HeuristicDetector)
    }
}

impl<D: CharsetDetector> Repairer<D> {
    pub fn with_detector(options: RepairOptions, detector: D) -> Self {
        Self {
            detector,
            table: options.table,
            fallback: options.fallback_chain,
            confidence_threshold: options.confidence_threshold,
        }
    }

    pub fn table(&self) -> &CorruptionTable {
        &self.table
    }

    pub fn repair(&self, text: &str) -> String {
        let (decoded, _) = self.decode(text);
        self.table.apply(&decoded)
    }

    /// Decode without the table pass, reporting which stage won.
    pub fn decode(&self, text: &str) -> (String, DecodeStage) {
        let raw = to_raw_bytes(text);
        if raw.is_lossy() {
            return (text.to_string(), DecodeStage::Kept);
        }

        let detection = self.detector.detect(&raw.bytes);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            charset = detection.charset.map(Charset::label),
            confidence = detection.confidence,
            "charset detection"
        );
        if detection.confidence > self.confidence_threshold {
            if let Some(charset) = detection.charset {
                return match charset.decode(&raw.bytes) {
                    Some(decoded) => (decoded, DecodeStage::Detected(charset)),
                    None => (text.to_string(), DecodeStage::Kept),
                };
            }
        }

        self.fallback
            .iter()
            .find_map(|cs| cs.decode(&raw.bytes).map(|d| (d, DecodeStage::Fallback(*cs))))
            .unwrap_or_else(|| (charset::force_utf8(&raw.bytes), DecodeStage::Forced))
    }
}
