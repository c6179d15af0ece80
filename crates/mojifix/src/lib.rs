//! Repair double-encoded Latin text and percent-encoded URLs in `.xlsx`
//! workbooks.
//!
//! ```no_run
//! use std::path::Path;
//! use mojifix::{RepairConfig, repair_file};
//!
//! let summary = repair_file(Path::new("teste.xlsx"), None, &RepairConfig::default())?;
//! println!("{} cells repaired", summary.repaired);
//! # Ok::<(), mojifix::IoError>(())
//! ```

pub mod config;

pub use mojifix_repair as repair;
pub use mojifix_workbook as workbook;

pub use config::{ConfigFile, ConfigFileError};

pub use mojifix_repair::{
    CellOutcome, CellPass, Charset, CharsetDetector, ConfigError, CorruptionTable, DecodeStage,
    Detection, HeuristicDetector, RepairOptions, Repairer, Replacement, SimilarityCache,
    decode_url,
};
pub use mojifix_workbook::{
    FillMarker, IoError, MemoryWorkbook, RepairConfig, RepairSummary, SheetSummary, TextCell,
    TextCellStore, UmyaWorkbook, default_output_path, repair_file, repair_workbook,
};
