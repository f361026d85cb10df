// Job list
// Loaded from ./infoArquivo.json unless another path is given

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the job list is read from when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "./infoArquivo.json";

/// One configured unit of work.
///
/// Field names on disk are the ones existing job files already use. Missing
/// fields default to empty; nothing is validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJobSpec {
    /// Directory holding the input spreadsheet
    #[serde(rename = "diretorio_arquivo")]
    pub input_dir: String,

    /// Input spreadsheet file name
    #[serde(rename = "nome_arquivo")]
    pub input_name: String,

    /// Columns that together define a duplicate
    #[serde(rename = "colunas")]
    pub columns: Vec<String>,

    /// Directory the result is written to
    #[serde(rename = "diretorio_saida")]
    pub output_dir: String,

    /// Output spreadsheet file name
    #[serde(rename = "nome_saida_excel")]
    pub output_name: String,
}

impl FileJobSpec {
    /// `<input_dir>/<input_name>`, joined literally.
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(format!("{}/{}", self.input_dir, self.input_name))
    }

    /// `<output_dir>/<output_name>`, joined literally.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}/{}", self.output_dir, self.output_name))
    }
}

/// Top-level shape of the job file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFile {
    #[serde(rename = "arquivos")]
    pub jobs: Vec<FileJobSpec>,
}

impl JobFile {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    /// The job file does not exist.
    NotFound(PathBuf),
    /// The job file exists but could not be read.
    Read { path: PathBuf, message: String },
    /// The job file is not valid JSON of the expected shape.
    Parse { path: PathBuf, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "job file not found: {}", path.display()),
            Self::Read { path, message } => {
                write!(f, "cannot read job file {}: {message}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "invalid job file {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read the ordered job list from `path`.
pub fn load_jobs(path: &Path) -> Result<Vec<FileJobSpec>, ConfigError> {
    let json = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Read { path: path.to_path_buf(), message: e.to_string() },
    })?;

    JobFile::from_json(&json)
        .map(|file| file.jobs)
        .map_err(|e| ConfigError::Parse { path: path.to_path_buf(), message: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TWO_JOBS: &str = r#"{
        "arquivos": [
            {
                "diretorio_arquivo": "./entrada",
                "nome_arquivo": "clientes.xlsx",
                "colunas": ["CPF", "Nome"],
                "diretorio_saida": "./saida",
                "nome_saida_excel": "duplicados.xlsx"
            },
            {
                "nome_arquivo": "pedidos.xlsx",
                "colunas": ["Pedido"]
            }
        ]
    }"#;

    #[test]
    fn test_parse_jobs_in_order() {
        let file = JobFile::from_json(TWO_JOBS).unwrap();
        assert_eq!(file.jobs.len(), 2);
        assert_eq!(file.jobs[0].input_name, "clientes.xlsx");
        assert_eq!(file.jobs[0].columns, vec!["CPF", "Nome"]);
        assert_eq!(file.jobs[1].input_name, "pedidos.xlsx");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let file = JobFile::from_json(TWO_JOBS).unwrap();
        let job = &file.jobs[1];
        assert_eq!(job.input_dir, "");
        assert_eq!(job.output_dir, "");
        assert_eq!(job.output_name, "");
    }

    #[test]
    fn test_paths_join_with_slash() {
        let job = &JobFile::from_json(TWO_JOBS).unwrap().jobs[0];
        assert_eq!(job.input_path(), PathBuf::from("./entrada/clientes.xlsx"));
        assert_eq!(job.output_path(), PathBuf::from("./saida/duplicados.xlsx"));
    }

    #[test]
    fn test_missing_list_key_is_empty() {
        let file = JobFile::from_json(r#"{"outra_chave": 1}"#).unwrap();
        assert!(file.jobs.is_empty());
    }

    #[test]
    fn test_unknown_job_fields_are_ignored() {
        let file = JobFile::from_json(r#"{"arquivos": [{"nome_arquivo": "a.xlsx", "extra": true}]}"#).unwrap();
        assert_eq!(file.jobs[0].input_name, "a.xlsx");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("infoArquivo.json");
        assert!(matches!(load_jobs(&path), Err(ConfigError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("infoArquivo.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_jobs(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("infoArquivo.json");
        fs::write(&path, TWO_JOBS).unwrap();
        assert_eq!(load_jobs(&path).unwrap().len(), 2);
    }
}
