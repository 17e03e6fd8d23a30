use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod config;
pub mod reader;
pub mod results;

use crate::model::config::ProcessConfig;
use crate::model::table::ResultsTable;
use config::load_config;
use results::read_results_table;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ResultsBundle {
    pub results_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub table: ResultsTable,
    pub config: Option<ProcessConfig>,
}

/// Loads a results directory: the first `*results.json[.gz]` file as the
/// table, and the run config from `config_path` or, when none is given, the
/// first `*config.json` in the directory.
pub fn load_results_dir(
    input_dir: &Path,
    config_path: Option<&Path>,
) -> Result<ResultsBundle, InputError> {
    let results_path = find_results_path(input_dir)?;
    let config_path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_path(input_dir)?,
    };

    tracing::info!(
        "discovered input files: results={}, config={}",
        results_path.display(),
        config_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "none".to_string())
    );

    let table = read_results_table(&results_path)?;
    tracing::info!(
        "loaded {} rows with columns {:?}",
        table.n_rows(),
        table.column_names()
    );

    let config = match &config_path {
        Some(path) => Some(load_config(path)?),
        None => None,
    };

    Ok(ResultsBundle {
        results_path,
        config_path,
        table,
        config,
    })
}

fn sorted_entries(input_dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    if !input_dir.is_dir() {
        return Err(InputError::MissingInput(format!(
            "{} is not a directory",
            input_dir.display()
        )));
    }
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_file() {
            entries.push(path);
        }
    }
    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_results_file(name: &str) -> bool {
    name.ends_with("results.json") || name.ends_with("results.json.gz")
}

pub fn find_results_path(input_dir: &Path) -> Result<PathBuf, InputError> {
    sorted_entries(input_dir)?
        .into_iter()
        .find(|p| is_results_file(&file_name(p)))
        .ok_or_else(|| {
            InputError::MissingInput(format!(
                "no *results.json or *results.json.gz in {}",
                input_dir.display()
            ))
        })
}

/// Reports written into the input directory (`averaged.json`,
/// `summary.json`) never match.
pub fn find_config_path(input_dir: &Path) -> Result<Option<PathBuf>, InputError> {
    Ok(sorted_entries(input_dir)?
        .into_iter()
        .find(|p| file_name(p).ends_with("config.json")))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
