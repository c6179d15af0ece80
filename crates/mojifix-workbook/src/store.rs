use crate::fill::FillMarker;

/// A text cell as handed to the repair pass. Rows and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCell {
    pub row: u32,
    pub col: u32,
    pub text: String,
}

impl TextCell {
    pub fn new(row: u32, col: u32, text: impl Into<String>) -> Self {
        Self {
            row,
            col,
            text: text.into(),
        }
    }
}

/// The slice of a workbook the repair pass needs: ordered sheets, their text
/// cells, and a way to write text and styling back.
pub trait TextCellStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sheet names in workbook order.
    fn sheet_names(&self) -> Result<Vec<String>, Self::Error>;

    /// Non-empty, non-formula text cells of `sheet`, sorted by row then column.
    fn text_cells(&self, sheet: &str) -> Result<Vec<TextCell>, Self::Error>;

    fn set_text(&mut self, sheet: &str, row: u32, col: u32, text: &str)
    -> Result<(), Self::Error>;

    fn apply_fill(
        &mut self,
        sheet: &str,
        row: u32,
        col: u32,
        marker: &FillMarker,
    ) -> Result<(), Self::Error>;
}
