use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod context;
pub mod judges;
pub mod reader;
pub mod scores;

use crate::model::records::DataContext;
use context::load_context_rows;
use judges::load_judge_table;
use scores::load_score_records;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{file}: malformed CSV: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },
    #[error("{0} is empty")]
    Empty(String),
    #[error("{file}: missing required column {column}")]
    MissingColumn { file: String, column: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Clone)]
pub struct InputPaths {
    pub scores: PathBuf,
    pub context: PathBuf,
    pub judges: PathBuf,
}

pub fn load_data_context(paths: &InputPaths) -> Result<DataContext, InputError> {
    tracing::info!(
        scores = %paths.scores.display(),
        context = %paths.context.display(),
        judges = %paths.judges.display(),
        "loading input tables"
    );
    let scores = load_score_records(&paths.scores)?;
    let contexts = load_context_rows(&paths.context)?;
    let judges = load_judge_table(&paths.judges)?;
    tracing::info!(
        scores = scores.len(),
        contexts = contexts.len(),
        judges = judges.len(),
        "input tables loaded"
    );
    Ok(DataContext {
        scores,
        contexts,
        judges,
    })
}

pub fn require_file(path: &Path) -> Result<(), InputError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(InputError::InvalidInput(format!(
            "input file not found: {}",
            path.display()
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
