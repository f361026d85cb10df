// Configuration loading

pub mod jobs;

pub use jobs::{load_jobs, ConfigError, FileJobSpec, JobFile, DEFAULT_CONFIG_PATH};
