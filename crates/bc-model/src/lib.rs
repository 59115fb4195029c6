//! bc-model: basin input model, file loading and validation.
//!
//! The data-access layer hands basins over in the shape defined in
//! [`schema`]; this crate only reads them, it never persists anything.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_basin};

use std::path::Path;

use serde::Deserialize;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A basin file holds either one basin or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum BasinFile {
    Many(Vec<Basin>),
    One(Box<Basin>),
}

impl BasinFile {
    fn into_basins(self) -> Vec<Basin> {
        match self {
            BasinFile::Many(basins) => basins,
            BasinFile::One(basin) => vec![*basin],
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
}

pub fn load_yaml(path: &Path) -> ModelResult<Vec<Basin>> {
    let content = std::fs::read_to_string(path)?;
    let file: BasinFile = serde_yaml::from_str(&content)?;
    Ok(file.into_basins())
}

pub fn load_json(path: &Path) -> ModelResult<Vec<Basin>> {
    let content = std::fs::read_to_string(path)?;
    let file: BasinFile = serde_json::from_str(&content)?;
    Ok(file.into_basins())
}

/// Load basins, picking the format from the file extension (`.yaml`/`.yml`
/// is YAML, anything else JSON).
pub fn load_basins(path: &Path) -> ModelResult<Vec<Basin>> {
    if is_yaml(path) {
        load_yaml(path)
    } else {
        load_json(path)
    }
}

/// Load basins and validate every one of them.
pub fn load_validated(path: &Path) -> ModelResult<Vec<Basin>> {
    let basins = load_basins(path)?;
    for basin in &basins {
        validate_basin(basin)?;
    }
    Ok(basins)
}

pub fn save_yaml(path: &Path, basins: &[Basin]) -> ModelResult<()> {
    for basin in basins {
        validate_basin(basin)?;
    }
    let content = serde_yaml::to_string(basins)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn save_json(path: &Path, basins: &[Basin]) -> ModelResult<()> {
    for basin in basins {
        validate_basin(basin)?;
    }
    let content = serde_json::to_string_pretty(basins)?;
    std::fs::write(path, content)?;
    Ok(())
}
