//! Duplicate analysis for one configured job.
//!
//! Load → validate columns → detect → export. Every branch ends in a
//! [`JobOutcome`] that is logged and turned into the status line the driver
//! prints; nothing here returns an error to the caller.

use std::fmt;
use std::path::{Path, PathBuf};

use dupcheck_config::FileJobSpec;
use dupcheck_engine::TableError;
use dupcheck_io::{xlsx, ImportError};

use crate::fsops::ensure_directory;
use crate::logging::RunLog;

/// Status line for a job whose columns contain no duplicates
pub const NO_DUPLICATES_MESSAGE: &str = "No duplicate rows found in the specified columns.";

/// How a job ended.
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    /// Nothing exists at the input path.
    InputNotFound { path: PathBuf },
    /// The input exists but could not be loaded as a table.
    LoadFailed { path: PathBuf, error: String },
    /// Requested columns missing from the input header.
    InvalidColumns(Vec<String>),
    /// Detection ran and found nothing; no file written.
    NoDuplicates,
    /// Duplicate rows were written to `path`.
    Exported { path: PathBuf, rows: usize },
    /// Duplicates were found but the output could not be written.
    ExportFailed { path: PathBuf, error: String },
}

impl JobOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::NoDuplicates | Self::Exported { .. })
    }
}

impl fmt::Display for JobOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound { path } => write!(
                f,
                "File not found: {}. Check the path and try again.",
                path.display()
            ),
            Self::LoadFailed { path, error } => {
                write!(f, "Error loading file {}: {}", path.display(), error)
            }
            Self::InvalidColumns(names) => write!(f, "Invalid columns: {}", names.join(", ")),
            Self::NoDuplicates => write!(f, "{NO_DUPLICATES_MESSAGE}"),
            Self::Exported { path, .. } => write!(f, "Result exported to: {}", path.display()),
            Self::ExportFailed { path, error } => {
                write!(f, "Error exporting result to {}: {}", path.display(), error)
            }
        }
    }
}

/// Run one job and return its status line.
pub fn analyze(job: &FileJobSpec, log: &RunLog) -> String {
    run_job(job, log).to_string()
}

/// Run one job: load the input, check the configured columns, export any
/// duplicate rows.
pub fn run_job(job: &FileJobSpec, log: &RunLog) -> JobOutcome {
    let input_path = job.input_path();
    let output_path = job.output_path();

    // The input directory is created too when absent; loading then fails
    // with a not-found status.
    ensure_directory(Path::new(&job.input_dir), log);
    ensure_directory(Path::new(&job.output_dir), log);

    log.info(format!("Loading file: {}", input_path.display()));
    let table = match xlsx::import(&input_path) {
        Ok(table) => table,
        Err(ImportError::NotFound(path)) => {
            return finish(log, JobOutcome::InputNotFound { path });
        }
        Err(e) => {
            return finish(log, JobOutcome::LoadFailed { path: input_path, error: e.to_string() });
        }
    };

    let duplicates = match table.duplicate_rows(&job.columns) {
        Ok(duplicates) => duplicates,
        Err(TableError::MissingColumns(names)) => {
            return finish(log, JobOutcome::InvalidColumns(names));
        }
        Err(e) => {
            return finish(log, JobOutcome::LoadFailed { path: input_path, error: e.to_string() });
        }
    };

    if duplicates.is_empty() {
        return finish(log, JobOutcome::NoDuplicates);
    }

    let rows = duplicates.row_count();
    log.info(format!("{rows} duplicate rows found in the specified columns."));

    match xlsx::export(&duplicates, &output_path) {
        Ok(_) => finish(log, JobOutcome::Exported { path: output_path, rows }),
        Err(e) => finish(log, JobOutcome::ExportFailed { path: output_path, error: e.to_string() }),
    }
}

fn finish(log: &RunLog, outcome: JobOutcome) -> JobOutcome {
    if outcome.is_success() {
        log.info(&outcome);
    } else {
        log.error(&outcome);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_columns_message_is_comma_joined() {
        let outcome = JobOutcome::InvalidColumns(vec!["CPF".into(), "Nome".into()]);
        assert_eq!(outcome.to_string(), "Invalid columns: CPF, Nome");
    }

    #[test]
    fn test_not_found_message_names_path() {
        let outcome = JobOutcome::InputNotFound { path: PathBuf::from("./in/a.xlsx") };
        assert_eq!(
            outcome.to_string(),
            "File not found: ./in/a.xlsx. Check the path and try again."
        );
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_no_duplicates_is_a_success() {
        assert!(JobOutcome::NoDuplicates.is_success());
        assert_eq!(JobOutcome::NoDuplicates.to_string(), NO_DUPLICATES_MESSAGE);
    }
}
