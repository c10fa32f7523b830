use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::model::key::AnswerKeyRow;
use crate::pipeline::cohort::CohortEntry;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid input in {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

pub fn read_json(path: &Path) -> Result<Value, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads gold-standard rows. Entries that are not objects are skipped here;
/// field-level problems are left to the key builder.
pub fn load_answer_key(path: &Path) -> Result<Vec<AnswerKeyRow>, InputError> {
    let value = read_json(path)?;
    let Value::Array(items) = value else {
        return Err(InputError::Invalid {
            path: path.to_path_buf(),
            message: "answer key must be a JSON array of rows".to_string(),
        });
    };

    let mut rows = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            debug!(entry = idx, "skipping answer key entry that is not an object");
            continue;
        }
        match serde_json::from_value::<AnswerKeyRow>(item) {
            Ok(row) => rows.push(row),
            Err(err) => debug!(entry = idx, "skipping answer key entry: {err}"),
        }
    }

    info!(path = %path.display(), rows = rows.len(), "loaded answer key rows");
    Ok(rows)
}

/// Candidate answers are returned raw; their shape is checked at scoring time.
pub fn load_candidate_answers(path: &Path) -> Result<Value, InputError> {
    read_json(path)
}

pub fn load_cohort(path: &Path) -> Result<Vec<CohortEntry>, InputError> {
    let value = read_json(path)?;
    let Value::Array(items) = value else {
        return Err(InputError::Invalid {
            path: path.to_path_buf(),
            message: "cohort must be a JSON array of entries".to_string(),
        });
    };

    let mut entries = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        let entry = serde_json::from_value::<CohortEntry>(item).map_err(|err| {
            InputError::Invalid {
                path: path.to_path_buf(),
                message: format!("cohort entry {}: {err}", idx + 1),
            }
        })?;
        entries.push(entry);
    }

    info!(path = %path.display(), entries = entries.len(), "loaded cohort");
    Ok(entries)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
