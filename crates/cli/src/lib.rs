//! `dupcheck-cli` — job driver for spreadsheet duplicate checks.
//!
//! Everything the `dupcheck` binary does lives here so it can be driven
//! from tests with an in-memory run log.

pub mod analyze;
pub mod driver;
pub mod fsops;
pub mod logging;

pub use analyze::{analyze, run_job, JobOutcome};
pub use driver::{read_job_specs, run};
pub use fsops::ensure_directory;
pub use logging::{RunLog, SharedBuffer};
