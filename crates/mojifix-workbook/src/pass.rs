use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use mojifix_repair::{CellOutcome, CellPass, CharsetDetector, RepairOptions};
use serde::Serialize;

use crate::error::{IoError, a1_location};
use crate::fill::FillMarker;
use crate::store::TextCellStore;
use crate::UmyaWorkbook;

pub const DEFAULT_LOCATION_LIMIT: usize = 20;

/// Name of the corrected copy written next to the input.
pub const OUTPUT_SUFFIX: &str = "_unicode_allpages";

#[derive(Debug, Clone)]
pub struct RepairConfig {
    pub options: RepairOptions,
    pub fill: FillMarker,
    /// Cap on the unrecoverable cell locations kept in the summary.
    pub location_limit: usize,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            options: RepairOptions::default(),
            fill: FillMarker::default(),
            location_limit: DEFAULT_LOCATION_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SheetSummary {
    pub visited: usize,
    pub repaired: usize,
    pub cache_hits: usize,
    pub unrecoverable: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepairSummary {
    /// Text cells looked at.
    pub visited: usize,
    /// Cells rewritten with a freshly decoded value.
    pub repaired: usize,
    /// Cells rewritten from a near-duplicate decoded earlier.
    pub cache_hits: usize,
    /// Repaired cells still holding U+FFFD; these carry the fill marker.
    pub unrecoverable: usize,
    pub sheets: BTreeMap<String, SheetSummary>,
    pub unrecoverable_cells: Vec<String>,
    pub unrecoverable_truncated: usize,
}

impl RepairSummary {
    pub fn changed(&self) -> usize {
        self.repaired + self.cache_hits
    }

    fn record(&mut self, sheet: &str, row: u32, col: u32, outcome: &CellOutcome, limit: usize) {
        let stats = self.sheets.entry(sheet.to_string()).or_default();
        stats.visited += 1;
        self.visited += 1;
        match outcome {
            CellOutcome::Unchanged => {}
            CellOutcome::CacheHit(_) => {
                stats.cache_hits += 1;
                self.cache_hits += 1;
            }
            CellOutcome::Repaired { unrecoverable, .. } => {
                stats.repaired += 1;
                self.repaired += 1;
                if *unrecoverable {
                    stats.unrecoverable += 1;
                    self.unrecoverable += 1;
                    if self.unrecoverable_cells.len() < limit {
                        self.unrecoverable_cells.push(a1_location(sheet, row, col));
                    } else {
                        self.unrecoverable_truncated += 1;
                    }
                }
            }
        }
    }
}

/// Run `pass` over every text cell of `store`: sheets in workbook order,
/// then rows, then columns.
pub fn repair_workbook<S, D>(
    store: &mut S,
    pass: &mut CellPass<D>,
    fill: &FillMarker,
    location_limit: usize,
) -> Result<RepairSummary, S::Error>
where
    S: TextCellStore,
    D: CharsetDetector,
{
    let mut summary = RepairSummary::default();
    for sheet in store.sheet_names()? {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("repair_sheet", sheet = sheet.as_str()).entered();
        summary.sheets.entry(sheet.clone()).or_default();

        for cell in store.text_cells(&sheet)? {
            let outcome = pass.process(&cell.text);
            if let Some(value) = outcome.value() {
                store.set_text(&sheet, cell.row, cell.col, value)?;
            }
            if outcome.needs_marker() {
                store.apply_fill(&sheet, cell.row, cell.col, fill)?;
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    location = %a1_location(&sheet, cell.row, cell.col),
                    "value still contains replacement characters"
                );
            }
            #[cfg(feature = "tracing")]
            if let Some(value) = outcome.value() {
                tracing::debug!(
                    location = %a1_location(&sheet, cell.row, cell.col),
                    from = cell.text.as_str(),
                    to = value,
                    "cell rewritten"
                );
            }
            summary.record(&sheet, cell.row, cell.col, &outcome, location_limit);
        }
    }
    Ok(summary)
}

/// `<dir>/<stem>_unicode_allpages.xlsx` for `<dir>/<stem>.<ext>`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.xlsx"))
}

/// Repair the workbook at `input` and write the corrected copy to `output`
/// (default: [`default_output_path`]).
///
/// The input file is never written. Nothing is written if any step before
/// the save fails.
pub fn repair_file(
    input: &Path,
    output: Option<&Path>,
    config: &RepairConfig,
) -> Result<RepairSummary, IoError> {
    config.options.validate()?;
    if !input.exists() {
        return Err(IoError::NotFound(input.to_path_buf()));
    }
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));
    if same_file(input, &output) {
        return Err(IoError::WouldOverwrite(output));
    }

    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!(
        "repair_file",
        input = %input.display(),
        output = %output.display()
    )
    .entered();

    let mut workbook = UmyaWorkbook::open_path(input).map_err(|source| IoError::Open {
        path: input.to_path_buf(),
        source,
    })?;
    let mut pass = CellPass::new(config.options.clone());
    let summary = repair_workbook(&mut workbook, &mut pass, &config.fill, config.location_limit)
        .map_err(|e| IoError::from_backend("umya", e))?;

    workbook
        .save_as_path(&output)
        .map_err(|source| IoError::Save {
            path: output.clone(),
            source,
        })?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        visited = summary.visited,
        repaired = summary.repaired,
        cache_hits = summary.cache_hits,
        unrecoverable = summary.unrecoverable,
        "workbook repaired"
    );
    Ok(summary)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
