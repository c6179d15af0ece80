//! Fixture workbooks for integration tests.

use std::path::{Path, PathBuf};

use umya_spreadsheet::Spreadsheet;

/// Build a workbook with `f` and save it to a fresh `.xlsx` file that
/// outlives the call.
pub fn build_workbook<F>(f: F) -> PathBuf
where
    F: FnOnce(&mut Spreadsheet),
{
    let file = tempfile::Builder::new()
        .prefix("mojifix-")
        .suffix(".xlsx")
        .tempfile()
        .expect("temp file");
    let (_, path) = file.keep().expect("keep temp file");
    write_workbook(&path, f);
    path
}

/// Build a workbook with `f` and save it as `dir/name`.
pub fn build_workbook_in<F>(dir: &Path, name: &str, f: F) -> PathBuf
where
    F: FnOnce(&mut Spreadsheet),
{
    let path = dir.join(name);
    write_workbook(&path, f);
    path
}

fn write_workbook<F>(path: &Path, f: F)
where
    F: FnOnce(&mut Spreadsheet),
{
    let mut book = umya_spreadsheet::new_file();
    f(&mut book);
    umya_spreadsheet::writer::xlsx::write(&book, path).expect("write workbook");
}

/// Set string cells on `sheet`, creating the sheet when missing.
/// Coordinates are `(col, row)`, 1-based.
pub fn put_strings(book: &mut Spreadsheet, sheet: &str, cells: &[((u32, u32), &str)]) {
    if book.get_sheet_by_name(sheet).is_none() {
        book.new_sheet(sheet).expect("new sheet");
    }
    let ws = book.get_sheet_by_name_mut(sheet).expect("sheet");
    for ((col, row), value) in cells {
        ws.get_cell_mut((*col, *row)).set_value_string(*value);
    }
}

/// String value of `(col, row)` in the workbook at `path`, if the cell exists.
pub fn read_string(path: &Path, sheet: &str, coord: (u32, u32)) -> Option<String> {
    let book = umya_spreadsheet::reader::xlsx::read(path).expect("read workbook");
    let ws = book.get_sheet_by_name(sheet)?;
    ws.get_cell(coord).map(|c| c.get_value().to_string())
}

/// ARGB background colour of `(col, row)` in the workbook at `path`.
pub fn read_fill(path: &Path, sheet: &str, coord: (u32, u32)) -> Option<String> {
    let book = umya_spreadsheet::reader::xlsx::read(path).expect("read workbook");
    let ws = book.get_sheet_by_name(sheet)?;
    ws.get_cell(coord)?
        .get_style()
        .get_background_color()
        .map(|c| c.get_argb().to_string())
}
