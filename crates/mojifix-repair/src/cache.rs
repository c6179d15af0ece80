use crate::options::DEFAULT_SIMILARITY_THRESHOLD;
use crate::similarity;

/// Insertion-ordered cache of decoded cell text, queried by similarity.
///
/// Lookups scan every key: the first key whose ratio against the candidate
/// is strictly above the threshold wins. Cost is linear in the number of
/// cached entries.
#[derive(Debug, Clone)]
pub struct SimilarityCache {
    entries: Vec<(String, String)>,
    threshold: f64,
}

impl Default for SimilarityCache {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl SimilarityCache {
    pub fn new(threshold: f64) -> Self {
        Self {
            entries: Vec::new(),
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the earliest-inserted key similar enough to `candidate`.
    pub fn find_similar(&self, candidate: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| {
                similarity::length_bound(candidate, key) > self.threshold
                    && similarity::ratio(candidate, key) > self.threshold
            })
            .map(|(_, value)| value.as_str())
    }

    /// Insert or overwrite. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let (key, value) = (key.into(), value.into());
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
