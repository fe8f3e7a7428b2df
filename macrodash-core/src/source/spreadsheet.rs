use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use super::{Cell, RawTable, TableSource};
use crate::MacroError;

/// Excel / OpenDocument workbooks read through `calamine`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetSource;

impl TableSource for SpreadsheetSource {
    fn name(&self) -> &'static str {
        "spreadsheet"
    }

    fn read(&self, path: &Path, sheet: Option<&str>) -> Result<RawTable, MacroError> {
        let shown = path.display().to_string();
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| MacroError::Data(format!("failed to open workbook {shown}: {e}")))?;

        let names = workbook.sheet_names();
        let name = match sheet {
            Some(wanted) => names
                .iter()
                .find(|n| n.as_str() == wanted)
                .cloned()
                .ok_or_else(|| MacroError::data_file_missing(&shown, format!("sheet '{wanted}' not found")))?,
            None => names
                .first()
                .cloned()
                .ok_or_else(|| MacroError::data_file_missing(&shown, "workbook has no sheets"))?,
        };

        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| MacroError::Data(format!("failed to read sheet '{name}' of {shown}: {e}")))?;

        Ok(table_from_rows(range.rows()))
    }
}

fn table_from_rows<'a, I>(mut rows: I) -> RawTable
where
    I: Iterator<Item = &'a [Data]>,
{
    let Some(header) = rows.next() else {
        return RawTable::default();
    };
    RawTable {
        headers: header.iter().map(|d| cell_of(d).display()).collect(),
        rows: rows.map(|r| r.iter().map(cell_of).collect()).collect(),
    }
}

fn cell_of(d: &Data) -> Cell {
    match d {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::String(s) | Data::DateTimeIso(s) => Cell::from_text(s),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map_or_else(|| Cell::Number(dt.as_f64()), |d| Cell::Date(d.date())),
        _ => Cell::Empty,
    }
}
