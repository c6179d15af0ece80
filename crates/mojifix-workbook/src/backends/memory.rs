use std::collections::BTreeMap;

use thiserror::Error;

use crate::fill::FillMarker;
use crate::store::{TextCell, TextCellStore};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("sheet not found: {0}")]
    SheetNotFound(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemoryCell {
    Text(String),
    Number(f64),
    Formula(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
struct MemorySheet {
    name: String,
    cells: BTreeMap<(u32, u32), MemoryCell>,
    fills: BTreeMap<(u32, u32), String>,
}

/// Workbook kept entirely in maps, for exercising the repair pass without
/// touching the filesystem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryWorkbook {
    sheets: Vec<MemorySheet>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sheet unless one with that name already exists.
    pub fn add_sheet(&mut self, name: &str) -> &mut Self {
        if !self.sheets.iter().any(|s| s.name == name) {
            self.sheets.push(MemorySheet {
                name: name.to_string(),
                ..MemorySheet::default()
            });
        }
        self
    }

    pub fn set(&mut self, sheet: &str, row: u32, col: u32, cell: MemoryCell) -> &mut Self {
        self.add_sheet(sheet);
        if let Some(s) = self.sheets.iter_mut().find(|s| s.name == sheet) {
            s.cells.insert((row, col), cell);
        }
        self
    }

    pub fn get(&self, sheet: &str, row: u32, col: u32) -> Option<&MemoryCell> {
        self.sheet(sheet).ok()?.cells.get(&(row, col))
    }

    pub fn text(&self, sheet: &str, row: u32, col: u32) -> Option<&str> {
        match self.get(sheet, row, col)? {
            MemoryCell::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn fill(&self, sheet: &str, row: u32, col: u32) -> Option<&str> {
        self.sheet(sheet)
            .ok()?
            .fills
            .get(&(row, col))
            .map(String::as_str)
    }

    fn sheet(&self, name: &str) -> Result<&MemorySheet, MemoryError> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| MemoryError::SheetNotFound(name.to_string()))
    }

    fn sheet_mut(&mut self, name: &str) -> Result<&mut MemorySheet, MemoryError> {
        self.sheets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| MemoryError::SheetNotFound(name.to_string()))
    }
}

impl TextCellStore for MemoryWorkbook {
    type Error = MemoryError;

    fn sheet_names(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.sheets.iter().map(|s| s.name.clone()).collect())
    }

    fn text_cells(&self, sheet: &str) -> Result<Vec<TextCell>, Self::Error> {
        Ok(self
            .sheet(sheet)?
            .cells
            .iter()
            .filter_map(|(&(row, col), cell)| match cell {
                MemoryCell::Text(t) if !t.is_empty() => Some(TextCell::new(row, col, t.clone())),
                _ => None,
            })
            .collect())
    }

    fn set_text(&mut self, sheet: &str, row: u32, col: u32, text: &str) -> Result<(), Self::Error> {
        self.sheet_mut(sheet)?
            .cells
            .insert((row, col), MemoryCell::Text(text.to_string()));
        Ok(())
    }

    fn apply_fill(
        &mut self,
        sheet: &str,
        row: u32,
        col: u32,
        marker: &FillMarker,
    ) -> Result<(), Self::Error> {
        self.sheet_mut(sheet)?
            .fills
            .insert((row, col), marker.argb().to_string());
        Ok(())
    }
}
