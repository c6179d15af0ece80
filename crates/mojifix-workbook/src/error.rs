use std::path::PathBuf;

use mojifix_repair::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("workbook `{}` was not found", .0.display())]
    NotFound(PathBuf),

    #[error("output `{}` would overwrite the input workbook", .0.display())]
    WouldOverwrite(PathBuf),

    #[error("failed to open workbook `{}`: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: umya_spreadsheet::XlsxError,
    },

    #[error("failed to save workbook `{}`: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: umya_spreadsheet::XlsxError,
    },

    #[error("{backend} backend error: {source}")]
    Backend {
        backend: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl IoError {
    pub fn from_backend<E>(backend: &'static str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend {
            backend,
            source: Box::new(err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// 1-based column number to its A1 letters (`1 → A`, `27 → AA`).
pub fn col_to_a1(mut col: u32) -> String {
    let mut letters = Vec::new();
    while col > 0 {
        let rem = ((col - 1) % 26) as u8;
        letters.push(b'A' + rem);
        col = (col - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// `Sheet!B7` style location.
pub fn a1_location(sheet: &str, row: u32, col: u32) -> String {
    format!("{sheet}!{}{row}", col_to_a1(col))
}
