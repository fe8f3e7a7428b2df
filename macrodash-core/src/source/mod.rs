//! Raw table readers for the supported file formats.
//!
//! A source only turns a file into header strings plus loosely typed cells;
//! column resolution and type coercion happen in [`crate::schema`].

use std::ffi::OsStr;
use std::path::Path;

use chrono::NaiveDate;

use crate::MacroError;

mod delimited;
mod spreadsheet;

pub use self::delimited::CsvSource;
pub use self::spreadsheet::SpreadsheetSource;

/// A single untyped cell as read from the source file.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Blank cell.
    Empty,
    /// Numeric cell (spreadsheets only; CSV cells are always text).
    Number(f64),
    /// Text cell, trimmed and non-empty.
    Text(String),
    /// Date-formatted spreadsheet cell.
    Date(NaiveDate),
}

impl Cell {
    /// Text cell, or `Empty` if the trimmed text is blank.
    #[must_use]
    pub fn from_text(raw: &str) -> Self {
        let t = raw.trim();
        if t.is_empty() {
            Self::Empty
        } else {
            Self::Text(t.to_string())
        }
    }

    /// Render the cell as text the way a spreadsheet would display it.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Number(v) => v.to_string(),
            Self::Text(s) => s.clone(),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Header row plus data rows of a single sheet or delimited file.
///
/// Rows may be shorter than the header; missing trailing cells read as `Empty`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    /// Header cells rendered as text.
    pub headers: Vec<String>,
    /// Data rows.
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Cell at `(row, col)`, treating out-of-range columns as blank.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        const EMPTY: &Cell = &Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(EMPTY)
    }
}

/// Reader for one file format.
pub trait TableSource: Send + Sync {
    /// Short format name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Read the table at `path`. `sheet` is only meaningful for workbooks;
    /// `None` selects the first sheet.
    ///
    /// # Errors
    /// - `DataFileMissing` if the file cannot be opened or the sheet is absent.
    /// - `Data` if the content cannot be parsed.
    fn read(&self, path: &Path, sheet: Option<&str>) -> Result<RawTable, MacroError>;
}

/// Pick a source by the file's (case-insensitive) extension.
///
/// # Errors
/// Returns `UnsupportedFormat` for any extension other than `.csv`, `.xlsx`,
/// `.xlsm`, `.xls` or `.ods`.
pub fn source_for_path(path: &Path) -> Result<&'static dyn TableSource, MacroError> {
    let ext = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "csv" => Ok(&CsvSource),
        "xlsx" | "xlsm" | "xls" | "ods" => Ok(&SpreadsheetSource),
        "" => Err(MacroError::unsupported_format("")),
        other => Err(MacroError::unsupported_format(format!(".{other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_source_by_extension() {
        assert_eq!(source_for_path(Path::new("a/b.CSV")).unwrap().name(), "csv");
        assert_eq!(
            source_for_path(Path::new("macro_data.xlsx")).unwrap().name(),
            "spreadsheet"
        );
        assert_eq!(
            source_for_path(Path::new("macro.json")).err(),
            Some(MacroError::unsupported_format(".json"))
        );
        assert!(matches!(
            source_for_path(Path::new("noext")),
            Err(MacroError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn short_rows_read_as_blank() {
        let t = RawTable {
            headers: vec!["a".into(), "b".into()],
            rows: vec![vec![Cell::Number(1.0)]],
        };
        assert_eq!(t.cell(0, 0), &Cell::Number(1.0));
        assert_eq!(t.cell(0, 1), &Cell::Empty);
        assert_eq!(t.cell(5, 0), &Cell::Empty);
    }
}
