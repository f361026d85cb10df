//! `dupcheck-engine` — in-memory table model and duplicate-row detection.
//!
//! Pure crate: no file IO, no logging. Tables come in from `dupcheck-io`,
//! results go back out the same way.

pub mod cell;
pub mod duplicates;
pub mod table;

pub use cell::{CellKey, CellValue};
pub use duplicates::duplicate_indices;
pub use table::{Table, TableError};
