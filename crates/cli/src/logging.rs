//! Run log: the timestamped INFO/ERROR file written by every run.
//!
//! `RunLog` is a handle, not global state. It wraps a non-global
//! `env_logger::Logger` whose pipe target is the log file (or any sink a
//! test hands in), and every component that logs takes `&RunLog`.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use env_logger::Target;
use log::{Level, LevelFilter, Log, Record};

/// Log file used when none is given on the command line
pub const DEFAULT_LOG_PATH: &str = "check_dup_app.log";

const LOG_TARGET: &str = "dupcheck";

/// `2026-10-17 09:30:00,123`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Sink shared between the logger and the handle that flushes it.
#[derive(Clone)]
struct SharedSink(Arc<Mutex<Box<dyn Write + Send>>>);

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).flush()
    }
}

pub struct RunLog {
    logger: env_logger::Logger,
    sink: SharedSink,
}

impl RunLog {
    /// Log to an arbitrary sink, one line per event.
    pub fn with_sink(sink: Box<dyn Write + Send>) -> Self {
        let sink = SharedSink(Arc::new(Mutex::new(sink)));
        let logger = env_logger::Builder::new()
            .filter_level(LevelFilter::Info)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} - {} - {}",
                    Local::now().format(TIMESTAMP_FORMAT),
                    record.level(),
                    record.args()
                )
            })
            .target(Target::Pipe(Box::new(sink.clone())))
            .build();
        Self { logger, sink }
    }

    /// Append to the log file at `path`, creating it if needed.
    pub fn to_file(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::with_sink(Box::new(file)))
    }

    /// In-memory log plus a handle for reading back what was written.
    pub fn in_memory() -> (Self, SharedBuffer) {
        let buffer = SharedBuffer::new();
        (Self::with_sink(Box::new(buffer.clone())), buffer)
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Level::Info, &message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Level::Error, &message);
    }

    fn emit(&self, level: Level, message: &dyn fmt::Display) {
        self.logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target(LOG_TARGET)
                .build(),
        );
    }

    /// Push everything written so far down to the sink.
    pub fn flush(&self) -> io::Result<()> {
        self.logger.flush();
        self.sink.clone().flush()
    }
}

/// Cloneable in-memory sink. Every clone sees the same bytes.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
