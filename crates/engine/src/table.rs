use std::fmt;

use crate::cell::{CellKey, CellValue};
use crate::duplicates::duplicate_indices;

/// Ordered header plus row-major cells.
///
/// Every row is exactly as wide as the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Requested columns that are not in the header.
    MissingColumns(Vec<String>),
    /// A row had more cells than the header has columns.
    RowTooWide { expected: usize, found: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingColumns(names) => write!(f, "missing columns: {}", names.join(", ")),
            Self::RowTooWide { expected, found } => {
                write!(f, "row has {found} cells, header has {expected} columns")
            }
        }
    }
}

impl std::error::Error for TableError {}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns, rows: Vec::new() }
    }

    /// Append a row. Short rows are padded with empty cells.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) -> Result<(), TableError> {
        let width = self.columns.len();
        if row.len() > width {
            return Err(TableError::RowTooWide { expected: width, found: row.len() });
        }
        row.resize(width, CellValue::Empty);
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Requested names that are not columns of this table, in request order.
    pub fn missing_columns<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        names
            .iter()
            .map(|n| n.as_ref())
            .filter(|n| self.column_index(n).is_none())
            .map(str::to_string)
            .collect()
    }

    /// Rows that agree with at least one other row on every named column.
    ///
    /// Every occurrence is kept and source order is preserved. The result
    /// shares this table's header. Fails without scanning rows if any name
    /// is not a column.
    pub fn duplicate_rows<S: AsRef<str>>(&self, names: &[S]) -> Result<Table, TableError> {
        let missing = self.missing_columns(names);
        if !missing.is_empty() {
            return Err(TableError::MissingColumns(missing));
        }

        let indices: Vec<usize> = names
            .iter()
            .filter_map(|n| self.column_index(n.as_ref()))
            .collect();

        let keys = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].key()).collect::<Vec<CellKey>>());

        let rows = duplicate_indices(keys)
            .into_iter()
            .map(|i| self.rows[i].clone())
            .collect();

        Ok(Table { columns: self.columns.clone(), rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn sample() -> Table {
        let mut t = Table::new(vec!["col1".into(), "col2".into(), "note".into()]);
        t.push_row(vec![text("A"), CellValue::Number(1.0), text("first")]).unwrap();
        t.push_row(vec![text("B"), CellValue::Number(2.0), text("second")]).unwrap();
        t.push_row(vec![text("A"), CellValue::Number(1.0), text("third")]).unwrap();
        t
    }

    #[test]
    fn duplicates_over_two_columns() {
        let dups = sample().duplicate_rows(&["col1", "col2"]).unwrap();
        assert_eq!(dups.row_count(), 2);
        assert_eq!(dups.get(0, 2), Some(&text("first")));
        assert_eq!(dups.get(1, 2), Some(&text("third")));
        assert_eq!(dups.columns(), sample().columns());
    }

    #[test]
    fn column_outside_subset_is_ignored() {
        // "note" differs between the two A rows but is not in the subset
        let dups = sample().duplicate_rows(&["col1"]).unwrap();
        assert_eq!(dups.row_count(), 2);
    }

    #[test]
    fn no_duplicates_when_subset_distinguishes_rows() {
        let dups = sample().duplicate_rows(&["note"]).unwrap();
        assert!(dups.is_empty());
    }

    #[test]
    fn missing_columns_are_reported_in_request_order() {
        let err = sample().duplicate_rows(&["zeta", "col1", "alpha"]).unwrap_err();
        assert_eq!(err, TableError::MissingColumns(vec!["zeta".into(), "alpha".into()]));
    }

    #[test]
    fn signed_zeros_match() {
        let mut t = Table::new(vec!["n".into()]);
        t.push_row(vec![CellValue::Number(0.0)]).unwrap();
        t.push_row(vec![CellValue::Number(-0.0)]).unwrap();
        assert_eq!(t.duplicate_rows(&["n"]).unwrap().row_count(), 2);
    }

    #[test]
    fn blanks_match_blanks() {
        let mut t = Table::new(vec!["a".into(), "b".into()]);
        t.push_row(vec![text("x")]).unwrap();
        t.push_row(vec![text("x"), CellValue::Empty]).unwrap();
        assert_eq!(t.duplicate_rows(&["a", "b"]).unwrap().row_count(), 2);
    }

    #[test]
    fn empty_subset_groups_every_row() {
        let dups = sample().duplicate_rows::<&str>(&[]).unwrap();
        assert_eq!(dups.row_count(), 3);
    }

    #[test]
    fn push_row_rejects_wide_rows() {
        let mut t = Table::new(vec!["only".into()]);
        let err = t.push_row(vec![text("a"), text("b")]).unwrap_err();
        assert_eq!(err, TableError::RowTooWide { expected: 1, found: 2 });
        assert!(t.is_empty());
    }
}
