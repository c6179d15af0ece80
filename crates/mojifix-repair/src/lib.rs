//! Heuristic repair of double-encoded Latin text and percent-encoded URLs.
//!
//! The building blocks are independent: [`Repairer`] fixes mojibake,
//! [`decode_url`] reverses percent-encoding, [`SimilarityCache`] reuses
//! earlier results for near-duplicate inputs. [`CellPass`] strings them
//! together for a sequence of spreadsheet cells.

pub mod cache;
pub mod charset;
pub mod detect;
mod error;
pub mod options;
pub mod pass;
pub mod repair;
pub mod similarity;
pub mod table;
pub mod url;

pub use cache::SimilarityCache;
pub use charset::Charset;
pub use detect::{CharsetDetector, Detection, HeuristicDetector};
pub use error::ConfigError;
pub use options::RepairOptions;
pub use pass::{CellOutcome, CellPass, REPLACEMENT_CHARACTER};
pub use repair::{DecodeStage, Repairer};
pub use table::{CorruptionTable, Replacement};
pub use url::decode_url;
