// dupcheck - report duplicate spreadsheet rows for each job in a JSON job file

mod exit_codes;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dupcheck_cli::driver;
use dupcheck_cli::logging::{RunLog, DEFAULT_LOG_PATH};
use dupcheck_config::DEFAULT_CONFIG_PATH;

use exit_codes::{EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "dupcheck")]
#[command(about = "Find duplicate rows in the spreadsheets listed in a JSON job file")]
#[command(version)]
#[command(after_help = "\
Examples:
  dupcheck
  dupcheck --config jobs/infoArquivo.json
  dupcheck --config jobs.json --log-file logs/dupcheck.log")]
struct Cli {
    /// JSON job file (object with an "arquivos" list)
    #[arg(long, short = 'c', env = "DUPCHECK_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log file; appended to, created if missing
    #[arg(long, env = "DUPCHECK_LOG", default_value = DEFAULT_LOG_PATH)]
    log_file: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version land here too and go to stdout
            let code = if e.use_stderr() { EXIT_USAGE } else { EXIT_SUCCESS };
            return ExitCode::from(code);
        }
    };

    match cmd_run(cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_IO, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn cmd_run(cli: Cli) -> Result<(), CliError> {
    let log = RunLog::to_file(&cli.log_file).map_err(|e| {
        CliError::io(format!("cannot open log file {}: {}", cli.log_file.display(), e))
            .with_hint("check that the log directory exists and is writable")
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver::run(&cli.config, &log, &mut out);

    Ok(())
}
