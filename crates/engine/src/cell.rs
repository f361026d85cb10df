use ordered_float::OrderedFloat;

/// A single cell as loaded from a spreadsheet.
///
/// Integer and float cells are both `Number`; dates keep their spreadsheet
/// serial so they can be written back unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    /// Date/time as a spreadsheet serial number (1900 date system).
    Date(f64),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Hashable form used for grouping rows.
    pub fn key(&self) -> CellKey {
        match self {
            CellValue::Empty => CellKey::Blank,
            CellValue::Text(s) => CellKey::Text(s.clone()),
            CellValue::Number(n) => CellKey::Number(OrderedFloat(*n)),
            CellValue::Date(n) => CellKey::Date(OrderedFloat(*n)),
            CellValue::Bool(b) => CellKey::Bool(*b),
        }
    }

    /// Plain text rendering, used for header names.
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) | CellValue::Date(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }
}

/// Equality/hash key for a cell.
///
/// Value equality, not identity: blanks equal blanks, NaN equals NaN, and a
/// date never equals a plain number with the same serial.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellKey {
    Blank,
    Bool(bool),
    Number(OrderedFloat<f64>),
    Date(OrderedFloat<f64>),
    Text(String),
}
