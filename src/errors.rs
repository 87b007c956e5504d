// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

use crate::dag::CycleReport;

#[derive(Error, Debug)]
pub enum TaskSortError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error("Unsupported document format for {0:?} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("Cyclical dependencies present. The task sequence cannot be sorted ({0})")]
    CyclicDependency(CycleReport),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskSortError>;
