//! Runs the cell repair pass over every sheet of a workbook.

pub mod backends;
pub mod error;
pub mod fill;
pub mod pass;
pub mod store;

pub use backends::{MemoryCell, MemoryError, MemoryWorkbook, UmyaWorkbook};
pub use error::{IoError, a1_location, col_to_a1};
pub use fill::FillMarker;
pub use pass::{
    DEFAULT_LOCATION_LIMIT, OUTPUT_SUFFIX, RepairConfig, RepairSummary, SheetSummary,
    default_output_path, repair_file, repair_workbook,
};
pub use store::{TextCell, TextCellStore};

// Re-export for convenience
pub use mojifix_repair::{CellOutcome, CellPass, RepairOptions};
