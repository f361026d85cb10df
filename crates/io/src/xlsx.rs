// Excel file import (xlsx, xlsm, xlsb, xls, ods) and export (xlsx only)
//
// Import: first worksheet only, first non-empty row is the header.
// Export: one worksheet, header row plus data rows, no index column.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use dupcheck_engine::{CellValue, Table};
use rust_xlsxwriter::{
    DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook as XlsxWorkbook,
};

/// Excel sheet limits
const MAX_ROWS: usize = 1_048_576;
const MAX_COLS: usize = 16_384;

/// Name given to the single exported worksheet
pub const SHEET_NAME: &str = "Sheet1";

/// Number format applied to exported date cells
const DATE_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ImportError {
    /// Nothing exists at the input path.
    NotFound(PathBuf),
    /// The file exists but could not be opened as a workbook.
    Open(String),
    /// The workbook has no worksheets.
    NoSheets,
    /// The first worksheet could not be read.
    Sheet { name: String, message: String },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "file not found: {}", path.display()),
            Self::Open(msg) => write!(f, "{msg}"),
            Self::NoSheets => write!(f, "workbook contains no sheets"),
            Self::Sheet { name, message } => write!(f, "failed to read sheet '{name}': {message}"),
        }
    }
}

impl std::error::Error for ImportError {}

#[derive(Debug)]
pub enum ExportError {
    /// Table does not fit in an Excel worksheet.
    TooLarge { rows: usize, cols: usize },
    /// A cell or header could not be written.
    Write(String),
    /// The workbook could not be saved to disk.
    Save(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { rows, cols } => write!(
                f,
                "table of {rows} rows x {cols} columns exceeds the sheet limit of {MAX_ROWS} x {MAX_COLS}"
            ),
            Self::Write(msg) => write!(f, "{msg}"),
            Self::Save(msg) => write!(f, "failed to save XLSX file: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

/// Load the first worksheet of a spreadsheet file into a [`Table`].
///
/// Blank header cells become `Unnamed: <index>` and repeated header names get
/// `.1`, `.2`, ... suffixes. Data rows with no non-empty cell are skipped.
pub fn import(path: &Path) -> Result<Table, ImportError> {
    if !path.exists() {
        return Err(ImportError::NotFound(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| ImportError::Open(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportError::NoSheets)?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ImportError::Sheet { name: sheet_name.clone(), message: e.to_string() })?;

    // The used range starts at its first non-empty cell; pad back to column A
    let first_col = range.start().map_or(0, |(_, col)| col as usize);
    let mut rows = range
        .rows()
        .map(|row| {
            std::iter::repeat(CellValue::Empty)
                .take(first_col)
                .chain(row.iter().map(convert_cell))
                .collect::<Vec<_>>()
        })
        .filter(|row| row.iter().any(|cell| !cell.is_empty()));

    let Some(header_row) = rows.next() else {
        return Ok(Table::default());
    };

    let mut table = Table::new(header_names(&header_row));
    for row in rows {
        table
            .push_row(row)
            .map_err(|e| ImportError::Sheet { name: sheet_name.clone(), message: e.to_string() })?;
    }

    Ok(table)
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(n) => CellValue::Number(*n),
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        // 1900 date system assumed, same as the serial calamine hands back
        Data::DateTime(dt) => CellValue::Date(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

/// Header names from the header row, made unique.
fn header_names(cells: &[CellValue]) -> Vec<String> {
    let raw = cells.iter().enumerate().map(|(idx, cell)| {
        let name = cell.display();
        if name.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            name
        }
    });

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(cells.len());
    for mut name in raw {
        let mut count = counts.get(&name).copied().unwrap_or(0);
        while count > 0 {
            counts.insert(name.clone(), count + 1);
            name = format!("{name}.{count}");
            count = counts.get(&name).copied().unwrap_or(0);
        }
        counts.insert(name.clone(), count + 1);
        names.push(name);
    }
    names
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Statistics from an export
#[derive(Debug, Default, Clone)]
pub struct ExportResult {
    pub rows_exported: usize,
    pub cells_exported: usize,
}

/// Write a table to an xlsx file: header row, then data rows in order.
///
/// The document creation time is pinned, so exporting the same table twice
/// produces identical bytes.
pub fn export(table: &Table, path: &Path) -> Result<ExportResult, ExportError> {
    let cols = table.columns().len();
    let rows = table.row_count() + 1;
    if rows > MAX_ROWS || cols > MAX_COLS {
        return Err(ExportError::TooLarge { rows, cols });
    }

    let mut result = ExportResult::default();
    let mut xlsx_workbook = XlsxWorkbook::new();

    let created = ExcelDateTime::from_ymd(2000, 1, 1)
        .map_err(|e| ExportError::Write(format!("Failed to set document properties: {}", e)))?;
    xlsx_workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

    let worksheet = xlsx_workbook
        .add_worksheet()
        .set_name(SHEET_NAME)
        .map_err(|e| ExportError::Write(format!("Failed to create sheet '{}': {}", SHEET_NAME, e)))?;

    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);
    let date_format = Format::new().set_num_format(DATE_FORMAT);

    for (col, name) in table.columns().iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, name, &header_format)
            .map_err(|e| ExportError::Write(format!("Failed to write header '{}': {}", name, e)))?;
    }

    for (row_idx, row) in table.rows().iter().enumerate() {
        let row32 = (row_idx + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let col16 = col as u16;
            let written = match cell {
                CellValue::Empty => continue,
                // Non-finite numbers have no xlsx representation; leave blank
                CellValue::Number(n) | CellValue::Date(n) if !n.is_finite() => continue,
                CellValue::Text(s) => worksheet.write_string(row32, col16, s),
                CellValue::Number(n) => worksheet.write_number(row32, col16, *n),
                CellValue::Date(n) => worksheet.write_number_with_format(row32, col16, *n, &date_format),
                CellValue::Bool(b) => worksheet.write_boolean(row32, col16, *b),
            };
            written.map_err(|e| {
                ExportError::Write(format!("Failed to write cell ({}, {}): {}", row32, col, e))
            })?;
            result.cells_exported += 1;
        }
        result.rows_exported += 1;
    }

    xlsx_workbook
        .save(path)
        .map_err(|e| ExportError::Save(e.to_string()))?;

    Ok(result)
}
