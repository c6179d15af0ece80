use std::path::Path;

use umya_spreadsheet::{CellRawValue, CellValue, Spreadsheet, XlsxError, reader::xlsx};

use crate::fill::FillMarker;
use crate::store::{TextCell, TextCellStore};

/// `.xlsx` workbook held fully in memory through umya-spreadsheet.
pub struct UmyaWorkbook {
    book: Spreadsheet,
}

impl UmyaWorkbook {
    pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Self, XlsxError> {
        // Full read, not lazy: every sheet is visited and written back.
        let mut book = xlsx::read(path.as_ref())?;
        book.read_sheet_collection();
        Ok(Self { book })
    }

    pub fn from_spreadsheet(book: Spreadsheet) -> Self {
        Self { book }
    }

    pub fn spreadsheet(&self) -> &Spreadsheet {
        &self.book
    }

    pub fn save_as_path<P: AsRef<Path>>(&self, path: P) -> Result<(), XlsxError> {
        umya_spreadsheet::writer::xlsx::write(&self.book, path.as_ref())
    }

    /// Formula cells are skipped even when the formula text holds an escaped URL.
    fn cell_text(cv: &CellValue) -> Option<String> {
        if cv.is_formula() {
            return None;
        }
        let text = match cv.get_raw_value() {
            CellRawValue::String(s) => s.to_string(),
            CellRawValue::RichText(rt) => rt.get_text().to_string(),
            CellRawValue::Lazy(s) => {
                // Only strings that would not be read back as numbers or booleans
                let txt: &str = s.as_ref();
                if txt.parse::<f64>().is_ok()
                    || txt.eq_ignore_ascii_case("TRUE")
                    || txt.eq_ignore_ascii_case("FALSE")
                {
                    return None;
                }
                txt.to_string()
            }
            _ => return None,
        };
        (!text.is_empty()).then_some(text)
    }

    fn sheet_not_found(sheet: &str) -> XlsxError {
        XlsxError::CellError(format!("sheet not found: {sheet}"))
    }
}

impl TextCellStore for UmyaWorkbook {
    type Error = XlsxError;

    fn sheet_names(&self) -> Result<Vec<String>, Self::Error> {
        let count = self.book.get_sheet_count();
        Ok((0..count)
            .filter_map(|i| self.book.get_sheet(&i))
            .map(|ws| ws.get_name().to_string())
            .collect())
    }

    fn text_cells(&self, sheet: &str) -> Result<Vec<TextCell>, Self::Error> {
        let ws = self
            .book
            .get_sheet_by_name(sheet)
            .ok_or_else(|| Self::sheet_not_found(sheet))?;
        let mut cells: Vec<TextCell> = ws
            .get_cell_collection()
            .into_iter()
            .filter_map(|cell| {
                let coord = cell.get_coordinate();
                let text = Self::cell_text(cell.get_cell_value())?;
                Some(TextCell::new(*coord.get_row_num(), *coord.get_col_num(), text))
            })
            .collect();
        // cell storage is unordered
        cells.sort_by_key(|c| (c.row, c.col));
        Ok(cells)
    }

    fn set_text(&mut self, sheet: &str, row: u32, col: u32, text: &str) -> Result<(), Self::Error> {
        let ws = self
            .book
            .get_sheet_by_name_mut(sheet)
            .ok_or_else(|| Self::sheet_not_found(sheet))?;
        // umya addresses cells as (col, row)
        ws.get_cell_mut((col, row)).set_value_string(text);
        Ok(())
    }

    fn apply_fill(
        &mut self,
        sheet: &str,
        row: u32,
        col: u32,
        marker: &FillMarker,
    ) -> Result<(), Self::Error> {
        let ws = self
            .book
            .get_sheet_by_name_mut(sheet)
            .ok_or_else(|| Self::sheet_not_found(sheet))?;
        ws.get_cell_mut((col, row))
            .get_style_mut()
            .set_background_color(marker.argb());
        Ok(())
    }
}
