// File I/O operations

pub mod xlsx;

pub use xlsx::{export, import, ExportError, ExportResult, ImportError};
