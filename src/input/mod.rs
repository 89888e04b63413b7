use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use thiserror::Error;

pub mod datasets;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Open a dataset file, decompressing transparently when it carries a
/// `.gz` extension.
pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Locate `<stem>.json` or `<stem>.json.gz` in the input directory.
pub fn find_dataset_path(input_dir: &Path, stem: &str) -> Result<PathBuf, InputError> {
    let plain = input_dir.join(format!("{stem}.json"));
    if plain.exists() {
        return Ok(plain);
    }
    let gz = input_dir.join(format!("{stem}.json.gz"));
    if gz.exists() {
        return Ok(gz);
    }
    Err(InputError::MissingInput(format!(
        "{stem}.json(.gz) not found in {}",
        input_dir.display()
    )))
}
