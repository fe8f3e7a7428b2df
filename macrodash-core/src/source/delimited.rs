use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{Cell, RawTable, TableSource};
use crate::MacroError;

/// Comma-delimited text with a header row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSource;

impl CsvSource {
    /// Parse CSV from any reader. `source_name` only appears in error messages.
    ///
    /// # Errors
    /// Returns `Data` on malformed CSV (invalid UTF-8, unterminated quotes, ...).
    pub fn parse_reader<R: Read>(reader: R, source_name: &str) -> Result<RawTable, MacroError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| MacroError::Data(format!("failed to read CSV headers of {source_name}: {e}")))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            // records() starts after the header line; lines are 1-based.
            let line = idx + 2;
            let record = result
                .map_err(|e| MacroError::Data(format!("CSV parse error in {source_name} at line {line}: {e}")))?;
            rows.push(record.iter().map(Cell::from_text).collect());
        }

        Ok(RawTable { headers, rows })
    }
}

impl TableSource for CsvSource {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn read(&self, path: &Path, _sheet: Option<&str>) -> Result<RawTable, MacroError> {
        let file = File::open(path)
            .map_err(|e| MacroError::data_file_missing(path.display().to_string(), e.to_string()))?;
        Self::parse_reader(file, &path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_cells_and_keeps_ragged_rows() {
        let input = "Date, Name ,Value\n2024-01-15, USD/RUB , 90.5\n2024-02-15,USD/RUB\n";
        let t = CsvSource::parse_reader(input.as_bytes(), "inline").unwrap();
        assert_eq!(t.headers, vec!["Date", "Name", "Value"]);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0][1], Cell::Text("USD/RUB".into()));
        assert_eq!(t.rows[0][2], Cell::Text("90.5".into()));
        assert_eq!(t.cell(1, 2), &Cell::Empty);
    }

    #[test]
    fn blank_cells_are_empty() {
        let t = CsvSource::parse_reader("a,b\n  ,x\n".as_bytes(), "inline").unwrap();
        assert_eq!(t.rows[0][0], Cell::Empty);
    }

    #[test]
    fn invalid_utf8_is_a_data_error() {
        let bytes: &[u8] = b"a,b\n\xff\xfe,1\n";
        assert!(matches!(
            CsvSource::parse_reader(bytes, "inline"),
            Err(MacroError::Data(_))
        ));
    }
}
