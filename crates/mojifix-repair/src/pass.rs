//! Per-cell repair pass.

use crate::cache::SimilarityCache;
use crate::detect::{CharsetDetector, HeuristicDetector};
use crate::options::RepairOptions;
use crate::repair::Repairer;
use crate::url::decode_url;

pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// What happened to one text cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellOutcome {
    /// Nothing to do; the cell must not be written.
    Unchanged,
    /// A near-duplicate was decoded earlier; write its value.
    CacheHit(String),
    /// Freshly decoded value differing from the input.
    Repaired {
        value: String,
        /// The value still carries U+FFFD and the cell should be marked.
        unrecoverable: bool,
    },
}

impl CellOutcome {
    /// New cell text, if the cell should be written.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Unchanged => None,
            Self::CacheHit(value) | Self::Repaired { value, .. } => Some(value),
        }
    }

    pub fn needs_marker(&self) -> bool {
        matches!(
            self,
            Self::Repaired {
                unrecoverable: true,
                ..
            }
        )
    }
}

/// Repair state carried across the cells of one run.
///
/// Results depend on the order cells are fed in, because every repaired cell
/// can satisfy later near-duplicate lookups.
#[derive(Debug, Clone)]
pub struct CellPass<D = HeuristicDetector> {
    repairer: Repairer<D>,
    cache: SimilarityCache,
}

impl Default for CellPass {
    fn default() -> Self {
        Self::new(RepairOptions::default())
    }
}

impl CellPass {
    pub fn new(options: RepairOptions) -> Self {
        Self::with_detector(options, HeuristicDetector)
    }
}

impl<D: CharsetDetector> CellPass<D> {
    pub fn with_detector(options: RepairOptions, detector: D) -> Self {
        let cache = SimilarityCache::new(options.similarity_threshold);
        Self {
            repairer: Repairer::with_detector(options, detector),
            cache,
        }
    }

    pub fn cache(&self) -> &SimilarityCache {
        &self.cache
    }

    pub fn repairer(&self) -> &Repairer<D> {
        &self.repairer
    }

    /// Process one non-empty text cell value.
    pub fn process(&mut self, text: &str) -> CellOutcome {
        if text.is_empty() {
            return CellOutcome::Unchanged;
        }
        if let Some(cached) = self.cache.find_similar(text) {
            #[cfg(feature = "tracing")]
            tracing::trace!(input = text, cached, "near-duplicate cache hit");
            return CellOutcome::CacheHit(cached.to_string());
        }

        let repaired = self.repairer.repair(text);
        let decoded = decode_url(&repaired).into_owned();
        if decoded == text {
            return CellOutcome::Unchanged;
        }

        self.cache.insert(decoded.clone(), decoded.clone());
        let unrecoverable = decoded.contains(REPLACEMENT_CHARACTER);
        CellOutcome::Repaired {
            value: decoded,
            unrecoverable,
        }
    }
}
