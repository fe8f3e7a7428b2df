//! Column resolution and row normalization.
//!
//! Source headers are matched case-insensitively against a static synonym
//! table (English, transliterated and Cyrillic spellings). After this single
//! pass every row becomes a typed [`Observation`].

use std::collections::HashMap;

use crate::source::{Cell, RawTable};
use crate::timeseries::util::{excel_serial_to_date, parse_date};
use crate::{Dataset, Frequency, MacroError, Method, Observation};

/// Canonical dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Observation date.
    Date,
    /// Display name.
    Name,
    /// Grouping key (optional, defaults to `Name`).
    Alias,
    /// Numeric value.
    Value,
    /// Unit of measure.
    Unit,
    /// Native frequency code.
    Freq,
    /// Aggregation method code.
    Method,
}

impl Column {
    /// Columns that must be present in every source.
    pub const REQUIRED: [Self; 6] = [
        Self::Date,
        Self::Name,
        Self::Value,
        Self::Unit,
        Self::Freq,
        Self::Method,
    ];

    /// Canonical column name.
    #[must_use]
    pub const fn canonical(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Name => "Name",
            Self::Alias => "Alias",
            Self::Value => "Value",
            Self::Unit => "Unit",
            Self::Freq => "Freq",
            Self::Method => "Method",
        }
    }
}

const SYNONYMS: &[(&str, Column)] = &[
    ("date", Column::Date),
    ("дата", Column::Date),
    ("name", Column::Name),
    ("indicator", Column::Name),
    ("naimenovanie", Column::Name),
    ("наименование", Column::Name),
    ("показатель", Column::Name),
    ("value", Column::Value),
    ("znachenie", Column::Value),
    ("значение", Column::Value),
    ("unit", Column::Unit),
    ("единицы", Column::Unit),
    ("freq", Column::Freq),
    ("frequency", Column::Freq),
    ("частота", Column::Freq),
    ("method", Column::Method),
    ("метод", Column::Method),
    ("alias", Column::Alias),
    ("псевдоним", Column::Alias),
];

/// Resolve a raw header to its canonical column, if any.
///
/// The header is trimmed, stripped of a UTF-8 BOM and lowercased first.
#[must_use]
pub fn canonical_column(header: &str) -> Option<Column> {
    // Spreadsheet tools sometimes prefix the first CSV header with a BOM.
    let key = header.trim().trim_start_matches('\u{feff}').trim().to_lowercase();
    SYNONYMS
        .iter()
        .find(|(syn, _)| *syn == key)
        .map(|(_, col)| *col)
}

/// Positions of the canonical columns inside a raw table.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    positions: HashMap<Column, usize>,
}

impl ColumnMap {
    /// Map headers to canonical columns; the first header wins on duplicates.
    ///
    /// # Errors
    /// Returns `InvalidSchema` naming the first required column that is absent.
    pub fn resolve(headers: &[String], source_name: &str) -> Result<Self, MacroError> {
        let mut positions = HashMap::new();
        for (idx, h) in headers.iter().enumerate() {
            if let Some(col) = canonical_column(h) {
                positions.entry(col).or_insert(idx);
            }
        }
        if let Some(missing) = Column::REQUIRED.iter().find(|c| !positions.contains_key(*c)) {
            return Err(MacroError::invalid_schema(missing.canonical(), source_name));
        }
        Ok(Self { positions })
    }

    /// Position of `col`, if present.
    #[must_use]
    pub fn get(&self, col: Column) -> Option<usize> {
        self.positions.get(&col).copied()
    }
}

/// Normalize a raw table into a sorted [`Dataset`].
///
/// Fully blank rows are skipped.
///
/// # Errors
/// - `InvalidSchema` if a required column is missing.
/// - `Data` if a non-blank row has a blank or unparsable date.
pub fn normalize(table: &RawTable, source_name: &str) -> Result<Dataset, MacroError> {
    let cols = ColumnMap::resolve(&table.headers, source_name)?;
    let at = |row: usize, col: Column| cell_at(table, &cols, row, col);

    let mut rows = Vec::with_capacity(table.rows.len());
    for (idx, raw) in table.rows.iter().enumerate() {
        // +2: data starts on the line after the header and lines are 1-based.
        let line = idx + 2;
        if raw.iter().all(|c| *c == Cell::Empty) {
            continue;
        }

        let date_cell = at(idx, Column::Date);
        let date = match date_cell {
            Cell::Empty => return Err(bad_date(source_name, line, date_cell)),
            Cell::Date(d) => *d,
            Cell::Number(n) => excel_serial_to_date(*n).ok_or_else(|| bad_date(source_name, line, date_cell))?,
            Cell::Text(s) => parse_date(s).ok_or_else(|| bad_date(source_name, line, date_cell))?,
        };

        let name = at(idx, Column::Name).display();
        let alias = match at(idx, Column::Alias) {
            Cell::Empty => name.clone(),
            other => other.display(),
        };

        rows.push(Observation {
            date,
            name,
            alias,
            value: parse_value(at(idx, Column::Value)),
            unit: Some(at(idx, Column::Unit).display()).filter(|u| !u.is_empty()),
            freq: Frequency::parse_lenient(&at(idx, Column::Freq).display()),
            method: Method::parse_lenient(&at(idx, Column::Method).display()),
        });
    }

    Ok(Dataset::from_observations(rows))
}

fn cell_at<'a>(table: &'a RawTable, cols: &ColumnMap, row: usize, col: Column) -> &'a Cell {
    const EMPTY: &Cell = &Cell::Empty;
    cols.get(col).map_or(EMPTY, |c| table.cell(row, c))
}

fn bad_date(source_name: &str, line: usize, cell: &Cell) -> MacroError {
    MacroError::Data(match cell {
        Cell::Empty => format!("{source_name}: line {line}: missing date"),
        _ => format!("{source_name}: line {line}: unparsable date {:?}", cell.display()),
    })
}

/// Numeric value of a cell; blank, non-numeric and non-finite cells are missing.
#[must_use]
pub fn parse_value(cell: &Cell) -> Option<f64> {
    let v = match cell {
        Cell::Number(n) => Some(*n),
        Cell::Text(s) => {
            let s = s.trim();
            s.parse::<f64>().ok().or_else(|| {
                // Decimal comma, as exported by Russian-locale spreadsheets.
                (s.contains(',') && !s.contains('.'))
                    .then(|| s.replace(',', "."))
                    .and_then(|t| t.parse::<f64>().ok())
            })
        }
        Cell::Empty | Cell::Date(_) => None,
    };
    v.filter(|x| x.is_finite())
}
