use std::io::Write;
use std::path::Path;

use dupcheck_config::{load_jobs, ConfigError, FileJobSpec};

use crate::analyze::analyze;
use crate::logging::RunLog;

/// Printed before each job starts
pub const START_NOTICE: &str = "Running duplicate check. Please wait...";

/// Read the job list, logging instead of failing.
///
/// A missing, unreadable or malformed job file gives an empty list.
pub fn read_job_specs(path: &Path, log: &RunLog) -> Vec<FileJobSpec> {
    match load_jobs(path) {
        Ok(jobs) => jobs,
        Err(ConfigError::NotFound(path)) => {
            log.error(format!(
                "Job file not found: {}. Check the path and try again.",
                path.display()
            ));
            Vec::new()
        }
        Err(e) => {
            log.error(e);
            Vec::new()
        }
    }
}

/// Run every configured job in order, printing a start notice and the
/// status line for each to `out`. Returns the number of jobs run.
///
/// Neither a failing job nor a failing `out` stops the run. Write errors are
/// logged and the log is always flushed.
pub fn run<W: Write>(config_path: &Path, log: &RunLog, out: &mut W) -> usize {
    let jobs = read_job_specs(config_path, log);

    for job in &jobs {
        report(out, log, START_NOTICE);
        let status = analyze(job, log);
        report(out, log, &status);
    }

    if let Err(e) = out.flush() {
        log.error(format!("Error writing progress output: {e}"));
    }
    if let Err(e) = log.flush() {
        eprintln!("warning: could not flush run log: {e}");
    }
    jobs.len()
}

fn report<W: Write>(out: &mut W, log: &RunLog, line: &str) {
    if let Err(e) = writeln!(out, "{line}") {
        log.error(format!("Error writing progress output: {e}"));
    }
}
